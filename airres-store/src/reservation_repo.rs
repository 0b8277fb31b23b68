use airres_core::repository::{RepoResult, ReservationRepository};
use airres_core::Reservation;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresReservationRepository {
    pool: PgPool,
}

impl PostgresReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {
    /// Duplicate (passenger, ticket) pairs are rejected by a unique constraint.
    async fn save_reservation(&self, reservation: &Reservation) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reservations (passenger_id, airline_ticket_id, reserve_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(reservation.passenger_id)
        .bind(reservation.ticket_id)
        .bind(reservation.reserved_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
