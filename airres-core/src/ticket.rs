use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Booking category of an airline ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TicketType {
    RoundTrip,
    OneWay,
}

impl TicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::RoundTrip => "round-trip",
            TicketType::OneWay => "one-way",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round-trip" => Ok(TicketType::RoundTrip),
            "one-way" => Ok(TicketType::OneWay),
            other => Err(CoreError::InvalidValue(format!(
                "ticket type must be 'round-trip' or 'one-way', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub ticket_id: i32,
    pub departure_location: String,
    pub arrival_location: String,
    pub ticket_type: TicketType,
    pub departure_at: Option<NaiveDateTime>,
    pub return_at: Option<NaiveDateTime>,
    pub tax: f64,
    pub total_price: f64,
}

/// A single leg of a ticket's itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub flight_id: i32,
    pub ticket_id: i32,
    pub departure_at: NaiveDateTime,
    pub arrival_at: NaiveDateTime,
    pub departure_location: String,
    pub arrival_location: String,
    pub flight_price: f64,
    /// Carrier charge on top of the leg price.
    pub charge: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_type_parsing() {
        assert_eq!("round-trip".parse::<TicketType>().unwrap(), TicketType::RoundTrip);
        assert_eq!("one-way".parse::<TicketType>().unwrap(), TicketType::OneWay);

        for bad in ["", "round", "Round-Trip", "one way", "oneway"] {
            let err = bad.parse::<TicketType>().unwrap_err();
            assert!(matches!(err, CoreError::InvalidValue(_)), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_ticket_type_text_matches_serde() {
        for ticket_type in [TicketType::RoundTrip, TicketType::OneWay] {
            let json = serde_json::to_string(&ticket_type).unwrap();
            assert_eq!(json, format!("\"{}\"", ticket_type));
            assert_eq!(ticket_type.to_string().parse::<TicketType>().unwrap(), ticket_type);
        }
    }
}
