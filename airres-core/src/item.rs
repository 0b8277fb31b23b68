use serde::{Deserialize, Serialize};

/// Stored catalogue entry. Hardware spec fields are kept flat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: Option<i32>,
    pub name: String,
    pub item_type: Option<String>,
    pub price: Option<i32>,
    pub stock: i32,
    pub cpu: Option<String>,
    pub capacity: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ItemSpec {
    pub cpu: Option<String>,
    pub capacity: Option<String>,
}

/// HTTP-facing item view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub price: Option<i32>,
    pub spec: ItemSpec,
}

/// Payload for registering an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemBody {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub price: Option<i32>,
    pub spec: Option<ItemSpec>,
}
