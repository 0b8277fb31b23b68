use airres_core::search::TicketSummaries;
use airres_core::ReservationResult;
use airres_shared::ReservationConfirmedEvent;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TicketQuery {
    #[serde(rename = "user-Id")]
    pub user_id: i32,
    #[serde(rename = "airline-ticket-type")]
    pub ticket_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub user_id: i32,
    pub airline_ticket_id: i32,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/air-reservation/tickets", get(find_airline_tickets))
        .route("/api/air-reservation/reservations", post(make_reservation))
}

async fn find_airline_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketQuery>,
) -> Result<Json<TicketSummaries>, AppError> {
    let tickets = state
        .reservations
        .find_user_favorite_place_tickets(query.user_id, &query.ticket_type)
        .await?;

    Ok(Json(TicketSummaries { tickets }))
}

async fn make_reservation(
    State(state): State<AppState>,
    Json(req): Json<ReservationRequest>,
) -> Result<Json<ReservationResult>, AppError> {
    let result = state
        .reservations
        .make_reservation(req.airline_ticket_id, req.user_id)
        .await?;

    info!(
        "Reservation confirmed: ticket {} user {}",
        req.airline_ticket_id, req.user_id
    );

    if let Some(events) = &state.events {
        let event = ReservationConfirmedEvent {
            ticket_id: req.airline_ticket_id,
            user_id: req.user_id,
            leg_count: result.prices.len(),
            total_price: result.total_price,
            timestamp: chrono::Utc::now().timestamp(),
        };
        // The reservation is already stored; a lost event does not fail the request.
        if let Err(e) = events.publish_reservation_confirmed(&event).await {
            warn!("Failed to publish {}: {}", ReservationConfirmedEvent::TOPIC, e);
        }
    }

    Ok(Json(result))
}
