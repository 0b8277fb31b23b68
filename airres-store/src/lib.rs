pub mod app_config;
pub mod database;
pub mod events;
pub mod item_repo;
pub mod memory;
pub mod reservation_repo;
pub mod ticket_repo;
pub mod user_repo;

pub use database::DbClient;
pub use events::EventProducer;
pub use item_repo::PostgresItemRepository;
pub use memory::InMemoryStore;
pub use reservation_repo::PostgresReservationRepository;
pub use ticket_repo::{PostgresFlightRepository, PostgresTicketRepository};
pub use user_repo::{PostgresPassengerRepository, PostgresUserRepository};
