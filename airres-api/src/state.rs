use std::sync::Arc;

use airres_core::repository::{
    FlightRepository, ItemRepository, PassengerRepository, ReservationRepository,
    TicketRepository, UserRepository,
};
use airres_core::{AirReservationService, ItemService};
use airres_store::{
    DbClient, EventProducer, InMemoryStore, PostgresFlightRepository, PostgresItemRepository,
    PostgresPassengerRepository, PostgresReservationRepository, PostgresTicketRepository,
    PostgresUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub reservations: AirReservationService,
    pub items: ItemService,
    /// `None` when no Kafka brokers are configured.
    pub events: Option<Arc<EventProducer>>,
}

impl AppState {
    pub fn from_postgres(db: &DbClient, events: Option<Arc<EventProducer>>) -> Self {
        let pool = db.pool.clone();
        let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
        let tickets: Arc<dyn TicketRepository> = Arc::new(PostgresTicketRepository::new(pool.clone()));
        let passengers: Arc<dyn PassengerRepository> =
            Arc::new(PostgresPassengerRepository::new(pool.clone()));
        let flights: Arc<dyn FlightRepository> = Arc::new(PostgresFlightRepository::new(pool.clone()));
        let reservations: Arc<dyn ReservationRepository> =
            Arc::new(PostgresReservationRepository::new(pool.clone()));
        let items: Arc<dyn ItemRepository> = Arc::new(PostgresItemRepository::new(pool));

        Self {
            reservations: AirReservationService::new(users, tickets, passengers, flights, reservations),
            items: ItemService::new(items),
            events,
        }
    }

    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            reservations: AirReservationService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
            ),
            items: ItemService::new(store),
            events: None,
        }
    }
}
