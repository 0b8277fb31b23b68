use airres_core::repository::{FlightRepository, RepoResult, TicketRepository};
use airres_core::{CoreError, Flight, Ticket, TicketType};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

const TICKET_COLUMNS: &str = "ticket_id, departure_loc, arrival_loc, ticket_type, departure_at, return_at, tax, total_price";

#[derive(sqlx::FromRow)]
struct TicketRow {
    ticket_id: i32,
    departure_loc: String,
    arrival_loc: String,
    ticket_type: String,
    departure_at: Option<NaiveDateTime>,
    return_at: Option<NaiveDateTime>,
    tax: f64,
    total_price: f64,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = CoreError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        Ok(Ticket {
            ticket_id: row.ticket_id,
            departure_location: row.departure_loc,
            arrival_location: row.arrival_loc,
            ticket_type: row.ticket_type.parse()?,
            departure_at: row.departure_at,
            return_at: row.return_at,
            tax: row.tax,
            total_price: row.total_price,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FlightRow {
    flight_id: i32,
    ticket_id: i32,
    departure_at: NaiveDateTime,
    arrival_at: NaiveDateTime,
    departure_loc: String,
    arrival_loc: String,
    flight_price: f64,
    charge: f64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_id: row.flight_id,
            ticket_id: row.ticket_id,
            departure_at: row.departure_at,
            arrival_at: row.arrival_at,
            departure_location: row.departure_loc,
            arrival_location: row.arrival_loc,
            flight_price: row.flight_price,
            charge: row.charge,
        }
    }
}

pub struct PostgresTicketRepository {
    pool: PgPool,
}

impl PostgresTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PostgresTicketRepository {
    async fn find_ticket_by_id(&self, ticket_id: i32) -> RepoResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {} FROM airline_tickets WHERE ticket_id = $1",
            TICKET_COLUMNS
        ))
        .bind(ticket_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Ticket::try_from(row)?)),
            None => Ok(None),
        }
    }

    async fn find_tickets_by_arrival_and_type(
        &self,
        arrival_location: &str,
        ticket_type: TicketType,
    ) -> RepoResult<Vec<Ticket>> {
        let rows = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {} FROM airline_tickets WHERE arrival_loc = $1 AND ticket_type = $2 ORDER BY ticket_id",
            TICKET_COLUMNS
        ))
        .bind(arrival_location)
        .bind(ticket_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        let tickets = rows
            .into_iter()
            .map(Ticket::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tickets)
    }
}

pub struct PostgresFlightRepository {
    pub pool: PgPool,
}

impl PostgresFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRepository for PostgresFlightRepository {
    async fn find_flights_by_ticket(&self, ticket: &Ticket) -> RepoResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT flight_id, ticket_id, departure_at, arrival_at,
                   departure_loc, arrival_loc, flight_price, charge
            FROM flights
            WHERE ticket_id = $1
            ORDER BY flight_id
            "#,
        )
        .bind(ticket.ticket_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }
}
