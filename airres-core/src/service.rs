use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};

use crate::mapper::ticket_to_summary;
use crate::repository::{
    FlightRepository, PassengerRepository, ReservationRepository, TicketRepository, UserRepository,
};
use crate::reservation::{Reservation, ReservationResult};
use crate::search::TicketSummary;
use crate::ticket::TicketType;
use crate::{CoreError, CoreResult};

/// Ticket search and booking on top of the directory, catalog and store collaborators.
#[derive(Clone)]
pub struct AirReservationService {
    users: Arc<dyn UserRepository>,
    tickets: Arc<dyn TicketRepository>,
    passengers: Arc<dyn PassengerRepository>,
    flights: Arc<dyn FlightRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl AirReservationService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tickets: Arc<dyn TicketRepository>,
        passengers: Arc<dyn PassengerRepository>,
        flights: Arc<dyn FlightRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            users,
            tickets,
            passengers,
            flights,
            reservations,
        }
    }

    /// Tickets arriving at the user's preferred destination with the requested type.
    pub async fn find_user_favorite_place_tickets(
        &self,
        user_id: i32,
        ticket_type: &str,
    ) -> CoreResult<Vec<TicketSummary>> {
        let ticket_type: TicketType = ticket_type.parse()?;

        let user = self
            .users
            .find_user_by_id(user_id)
            .await
            .map_err(lookup_failed)?
            .ok_or_else(|| CoreError::NotFound(format!("user {} not found", user_id)))?;

        // A user without a preferred destination cannot match any ticket.
        let tickets = match user.like_travel_place.as_deref() {
            Some(place) => self
                .tickets
                .find_tickets_by_arrival_and_type(place, ticket_type)
                .await
                .map_err(lookup_failed)?,
            None => Vec::new(),
        };

        if tickets.is_empty() {
            return Err(CoreError::NotFound(format!(
                "no {} tickets to {} for user {}",
                ticket_type,
                user.like_travel_place.as_deref().unwrap_or("<unset>"),
                user_id
            )));
        }

        Ok(tickets.iter().map(ticket_to_summary).collect())
    }

    /// Books `ticket_id` for the passenger of `user_id`.
    ///
    /// Lookups run strictly in order (ticket, passenger, flights) and the
    /// reservation is only written once all three have succeeded. A rejected
    /// write is reported as [`CoreError::NotAcceptable`] and is not retried.
    pub async fn make_reservation(
        &self,
        ticket_id: i32,
        user_id: i32,
    ) -> CoreResult<ReservationResult> {
        let ticket = self
            .tickets
            .find_ticket_by_id(ticket_id)
            .await
            .map_err(lookup_failed)?
            .ok_or_else(|| CoreError::NotFound(format!("airline ticket {} not found", ticket_id)))?;

        let passenger = self
            .passengers
            .find_passenger_by_user_id(user_id)
            .await
            .map_err(lookup_failed)?
            .ok_or_else(|| {
                CoreError::NotFound(format!("no passenger registered for user {}", user_id))
            })?;

        let flights = self
            .flights
            .find_flights_by_ticket(&ticket)
            .await
            .map_err(lookup_failed)?;

        if flights.is_empty() {
            return Err(CoreError::NotFound(format!(
                "no flights found for airline ticket {}",
                ticket.ticket_id
            )));
        }

        let reservation = Reservation::new(&passenger, &ticket);
        if let Err(e) = self.reservations.save_reservation(&reservation).await {
            warn!(
                "Reservation rejected for ticket {} passenger {}: {}",
                ticket.ticket_id, passenger.passenger_id, e
            );
            return Err(CoreError::NotAcceptable(format!(
                "reservation could not be registered: {}",
                e
            )));
        }

        info!(
            "Reservation registered: ticket {} passenger {} ({} legs)",
            ticket.ticket_id,
            passenger.passenger_id,
            flights.len()
        );

        Ok(ReservationResult::from_legs(&ticket, &flights))
    }
}

fn lookup_failed(e: Box<dyn Error + Send + Sync>) -> CoreError {
    CoreError::InternalError(e.to_string())
}
