use airres_shared::Masked;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i32,
    pub user_name: String,
    pub phone_num: Masked<String>,
    /// Preferred travel destination, matched against ticket arrival locations.
    pub like_travel_place: Option<String>,
}

/// Travel identity of a user; one passenger per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub passenger_id: i32,
    pub user_id: i32,
    pub passport_num: Masked<String>,
}
