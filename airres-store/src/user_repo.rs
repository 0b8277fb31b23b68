use airres_core::repository::{PassengerRepository, RepoResult, UserRepository};
use airres_core::{Passenger, User};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i32,
    user_name: String,
    phone_num: Option<String>,
    like_travel_place: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            user_id: row.user_id,
            user_name: row.user_name,
            phone_num: row.phone_num.unwrap_or_default().into(),
            like_travel_place: row.like_travel_place,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PassengerRow {
    passenger_id: i32,
    user_id: i32,
    passport_num: String,
}

impl From<PassengerRow> for Passenger {
    fn from(row: PassengerRow) -> Self {
        Passenger {
            passenger_id: row.passenger_id,
            user_id: row.user_id,
            passport_num: row.passport_num.into(),
        }
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_user_by_id(&self, user_id: i32) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, user_name, phone_num, like_travel_place FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}

pub struct PostgresPassengerRepository {
    pool: PgPool,
}

impl PostgresPassengerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassengerRepository for PostgresPassengerRepository {
    async fn find_passenger_by_user_id(&self, user_id: i32) -> RepoResult<Option<Passenger>> {
        let row = sqlx::query_as::<_, PassengerRow>(
            "SELECT passenger_id, user_id, passport_num FROM passengers WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Passenger::from))
    }
}
