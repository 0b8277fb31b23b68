/// Published on `reservation.confirmed` once a reservation row has been written.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct ReservationConfirmedEvent {
    pub ticket_id: i32,
    pub user_id: i32,
    pub leg_count: usize,
    pub total_price: i32,
    pub timestamp: i64,
}

impl ReservationConfirmedEvent {
    pub const TOPIC: &'static str = "reservation.confirmed";

    pub fn key(&self) -> String {
        format!("{}:{}", self.ticket_id, self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_key_and_payload() {
        let event = ReservationConfirmedEvent {
            ticket_id: 1,
            user_id: 7,
            leg_count: 6,
            total_price: 20000,
            timestamp: 1_700_000_000,
        };

        assert_eq!(event.key(), "1:7");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["ticket_id"], 1);
        assert_eq!(json["total_price"], 20000);
    }
}
