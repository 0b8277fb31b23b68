use std::sync::RwLock;

use airres_core::repository::{
    FlightRepository, ItemRepository, PassengerRepository, RepoResult, ReservationRepository,
    TicketRepository, UserRepository,
};
use airres_core::{Flight, Item, Passenger, Reservation, Ticket, TicketType, User};
use async_trait::async_trait;

/// In-process implementation of every store trait. Rows keep insertion order,
/// which stands in for catalog order.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    tickets: RwLock<Vec<Ticket>>,
    passengers: RwLock<Vec<Passenger>>,
    flights: RwLock<Vec<Flight>>,
    reservations: RwLock<Vec<Reservation>>,
    items: RwLock<Vec<Item>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        write(&self.users).push(user);
        self
    }

    pub fn with_ticket(self, ticket: Ticket) -> Self {
        write(&self.tickets).push(ticket);
        self
    }

    pub fn with_passenger(self, passenger: Passenger) -> Self {
        write(&self.passengers).push(passenger);
        self
    }

    pub fn with_flight(self, flight: Flight) -> Self {
        write(&self.flights).push(flight);
        self
    }

    pub fn with_item(self, item: Item) -> Self {
        write(&self.items).push(item);
        self
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        read(&self.reservations).clone()
    }
}

// Poisoning is ignored: rows are plain values and stay consistent after a panic.
fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_user_by_id(&self, user_id: i32) -> RepoResult<Option<User>> {
        Ok(read(&self.users).iter().find(|u| u.user_id == user_id).cloned())
    }
}

#[async_trait]
impl TicketRepository for InMemoryStore {
    async fn find_ticket_by_id(&self, ticket_id: i32) -> RepoResult<Option<Ticket>> {
        Ok(read(&self.tickets)
            .iter()
            .find(|t| t.ticket_id == ticket_id)
            .cloned())
    }

    async fn find_tickets_by_arrival_and_type(
        &self,
        arrival_location: &str,
        ticket_type: TicketType,
    ) -> RepoResult<Vec<Ticket>> {
        Ok(read(&self.tickets)
            .iter()
            .filter(|t| t.arrival_location == arrival_location && t.ticket_type == ticket_type)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PassengerRepository for InMemoryStore {
    async fn find_passenger_by_user_id(&self, user_id: i32) -> RepoResult<Option<Passenger>> {
        Ok(read(&self.passengers)
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl FlightRepository for InMemoryStore {
    async fn find_flights_by_ticket(&self, ticket: &Ticket) -> RepoResult<Vec<Flight>> {
        Ok(read(&self.flights)
            .iter()
            .filter(|f| f.ticket_id == ticket.ticket_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn save_reservation(&self, reservation: &Reservation) -> RepoResult<()> {
        let mut reservations = write(&self.reservations);
        let duplicate = reservations.iter().any(|r| {
            r.passenger_id == reservation.passenger_id && r.ticket_id == reservation.ticket_id
        });
        if duplicate {
            return Err(format!(
                "passenger {} already holds a reservation for ticket {}",
                reservation.passenger_id, reservation.ticket_id
            )
            .into());
        }
        reservations.push(reservation.clone());
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn find_all_items(&self) -> RepoResult<Vec<Item>> {
        Ok(read(&self.items).clone())
    }

    async fn find_item_by_id(&self, id: i32) -> RepoResult<Option<Item>> {
        Ok(read(&self.items).iter().find(|i| i.id == Some(id)).cloned())
    }

    async fn save_item(&self, item: &Item) -> RepoResult<i32> {
        let mut items = write(&self.items);
        let id = items.iter().filter_map(|i| i.id).max().unwrap_or(0) + 1;
        items.push(Item {
            id: Some(id),
            ..item.clone()
        });
        Ok(id)
    }
}
