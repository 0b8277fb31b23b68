use serde::{Deserialize, Serialize};

/// Presentable view of a ticket returned by the favorite-destination query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub depart: String,
    pub arrival: String,
    pub departure_time: Option<String>,
    pub return_time: Option<String>,
    pub ticket_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketSummaries {
    pub tickets: Vec<TicketSummary>,
}
