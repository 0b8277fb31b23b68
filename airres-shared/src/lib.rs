pub mod models;
pub mod pii;

pub use models::events::ReservationConfirmedEvent;
pub use pii::Masked;
