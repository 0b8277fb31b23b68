//! Field-by-field conversions between stored entities and their DTOs.

use chrono::NaiveDateTime;

use crate::item::{Item, ItemBody, ItemDto, ItemSpec};
use crate::search::TicketSummary;
use crate::ticket::Ticket;

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_date_time(value: Option<NaiveDateTime>) -> Option<String> {
    value.map(|t| t.format(DATE_TIME_FORMAT).to_string())
}

pub fn ticket_to_summary(ticket: &Ticket) -> TicketSummary {
    TicketSummary {
        depart: ticket.departure_location.clone(),
        arrival: ticket.arrival_location.clone(),
        departure_time: format_date_time(ticket.departure_at),
        return_time: format_date_time(ticket.return_at),
        ticket_id: ticket.ticket_id,
    }
}

pub fn item_to_dto(item: &Item) -> ItemDto {
    ItemDto {
        id: item.id.map(|id| id.to_string()),
        name: item.name.clone(),
        item_type: item.item_type.clone(),
        price: item.price,
        spec: ItemSpec {
            cpu: item.cpu.clone(),
            capacity: item.capacity.clone(),
        },
    }
}

/// New items always start with zero stock.
pub fn item_body_to_item(id: Option<i32>, body: &ItemBody) -> Item {
    let spec = body.spec.as_ref();
    Item {
        id,
        name: body.name.clone(),
        item_type: body.item_type.clone(),
        price: body.price,
        stock: 0,
        cpu: spec.and_then(|s| s.cpu.clone()),
        capacity: spec.and_then(|s| s.capacity.clone()),
    }
}
