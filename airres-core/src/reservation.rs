use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ticket::{Flight, Ticket};
use crate::user::Passenger;

/// Binding of a passenger to a ticket, written once by the reservation store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub passenger_id: i32,
    pub ticket_id: i32,
    pub reserved_at: NaiveDateTime,
}

impl Reservation {
    pub fn new(passenger: &Passenger, ticket: &Ticket) -> Self {
        Self {
            passenger_id: passenger.passenger_id,
            ticket_id: ticket.ticket_id,
            reserved_at: Local::now().naive_local(),
        }
    }
}

/// Outcome of a successful reservation, in integral display units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResult {
    pub prices: Vec<i32>,
    pub charges: Vec<i32>,
    pub tax: i32,
    pub total_price: i32,
    /// Always true: every failure path returns an error before this is built.
    pub success: bool,
}

impl ReservationResult {
    /// Truncates (never rounds) every monetary value; legs keep catalog order.
    pub fn from_legs(ticket: &Ticket, flights: &[Flight]) -> Self {
        Self {
            prices: flights.iter().map(|f| f.flight_price as i32).collect(),
            charges: flights.iter().map(|f| f.charge as i32).collect(),
            tax: ticket.tax as i32,
            total_price: ticket.total_price as i32,
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::TicketType;

    fn leg(id: i32, price: f64, charge: f64) -> Flight {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Flight {
            flight_id: id,
            ticket_id: 1,
            departure_at: at,
            arrival_at: at,
            departure_location: "Seoul".to_string(),
            arrival_location: "Paris".to_string(),
            flight_price: price,
            charge,
        }
    }

    #[test]
    fn test_result_truncates_instead_of_rounding() {
        let ticket = Ticket {
            ticket_id: 1,
            departure_location: "Seoul".to_string(),
            arrival_location: "Paris".to_string(),
            ticket_type: TicketType::RoundTrip,
            departure_at: None,
            return_at: None,
            tax: 1999.99,
            total_price: 20000.7,
        };
        let flights = vec![leg(1, 14000.9, 60000.5), leg(2, 13999.1, 0.99)];

        let result = ReservationResult::from_legs(&ticket, &flights);

        assert_eq!(result.prices, vec![14000, 13999]);
        assert_eq!(result.charges, vec![60000, 0]);
        assert_eq!(result.tax, 1999);
        assert_eq!(result.total_price, 20000);
        assert!(result.success);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ReservationResult {
            prices: vec![1],
            charges: vec![2],
            tax: 3,
            total_price: 4,
            success: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalPrice"], 4);
        assert_eq!(json["success"], true);
    }
}
