pub mod item;
pub mod item_service;
pub mod mapper;
pub mod repository;
pub mod reservation;
pub mod search;
pub mod service;
pub mod ticket;
pub mod user;

pub use item::{Item, ItemBody, ItemDto, ItemSpec};
pub use item_service::ItemService;
pub use reservation::{Reservation, ReservationResult};
pub use search::TicketSummary;
pub use service::AirReservationService;
pub use ticket::{Flight, Ticket, TicketType};
pub use user::{Passenger, User};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
