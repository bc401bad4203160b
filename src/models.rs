use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Availability::Available),
            "unavailable" => Some(Availability::Unavailable),
            _ => None,
        }
    }
}

/// Where an item is prepared. `Unfiltered` items only show up in the "all" view,
/// and `Unfiltered` used as a filter tag selects every item.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kitchen,
    Bar,
    #[default]
    #[serde(alias = "all")]
    Unfiltered,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kitchen => "kitchen",
            Category::Bar => "bar",
            Category::Unfiltered => "unfiltered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "kitchen" => Some(Category::Kitchen),
            "bar" => Some(Category::Bar),
            "unfiltered" | "all" => Some(Category::Unfiltered),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub availability: Availability,
    pub category: Category,
    pub image: Option<String>,
    pub prep_minutes: u32,
}

impl MenuItem {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SelectionEntry {
    pub item_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub prep_minutes: u32,
    pub quantity: u32,
}

/// A catalog row as the page renders it, with its selection affordance.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuCard {
    pub item: MenuItem,
    pub selected: bool,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionView {
    pub summary: String,
    pub pending: bool,
    pub panel_open: bool,
    pub entries: Vec<SelectionEntry>,
    pub distinct_items: usize,
    pub total_quantity: u32,
    pub estimated_minutes: u32,
    pub category: Category,
    pub contact: ContactDetails,
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Venue {
    pub restaurant_name: String,
    pub table_label: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReceiptLine {
    pub menu_item_id: i64,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderReceipt {
    pub id: i64,
    pub table_label: String,
    pub items: Vec<ReceiptLine>,
    pub estimated_minutes: u32,
    pub submitted_at: String,
}
