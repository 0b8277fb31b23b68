use async_trait::async_trait;
use std::error::Error;

use crate::item::Item;
use crate::reservation::Reservation;
use crate::ticket::{Flight, Ticket, TicketType};
use crate::user::{Passenger, User};

pub type RepoResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_id(&self, user_id: i32) -> RepoResult<Option<User>>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_ticket_by_id(&self, ticket_id: i32) -> RepoResult<Option<Ticket>>;

    /// Returned in catalog order.
    async fn find_tickets_by_arrival_and_type(
        &self,
        arrival_location: &str,
        ticket_type: TicketType,
    ) -> RepoResult<Vec<Ticket>>;
}

#[async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn find_passenger_by_user_id(&self, user_id: i32) -> RepoResult<Option<Passenger>>;
}

#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Legs of the ticket in itinerary order; may be empty.
    async fn find_flights_by_ticket(&self, ticket: &Ticket) -> RepoResult<Vec<Flight>>;
}

/// Create-or-reject: a failed save leaves nothing behind.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn save_reservation(&self, reservation: &Reservation) -> RepoResult<()>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_all_items(&self) -> RepoResult<Vec<Item>>;

    async fn find_item_by_id(&self, id: i32) -> RepoResult<Option<Item>>;

    /// Returns the id assigned by the store.
    async fn save_item(&self, item: &Item) -> RepoResult<i32>;
}
