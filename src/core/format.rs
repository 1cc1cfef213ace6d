//! Display formatting for cafe rows.

use crate::models::cafe::Cafe;

pub const PRESENT: &str = "✔";
pub const ABSENT: &str = "✘";

/// Column headings of the listing, in display order.
pub const CAFE_HEADINGS: [&str; 10] = [
    "Name",
    "Map URL",
    "Image URL",
    "Location",
    "Sockets",
    "Toilet",
    "WiFi",
    "Takes Calls",
    "Seat Count",
    "Coffee Price",
];

pub fn bool_to_icon(value: bool) -> &'static str {
    if value { PRESENT } else { ABSENT }
}

/// Read-only view of a cafe: amenities are glyphs, everything else is
/// copied through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: &'static str,
    pub has_toilet: &'static str,
    pub has_wifi: &'static str,
    pub can_take_calls: &'static str,
    pub seats: String,
    pub coffee_price: String,
}

impl FormattedCafe {
    /// Values in the same order as [`CAFE_HEADINGS`].
    pub fn columns(&self) -> [&str; 10] {
        [
            self.name.as_str(),
            self.map_url.as_str(),
            self.img_url.as_str(),
            self.location.as_str(),
            self.has_sockets,
            self.has_toilet,
            self.has_wifi,
            self.can_take_calls,
            self.seats.as_str(),
            self.coffee_price.as_str(),
        ]
    }
}

pub fn format_cafe(cafe: &Cafe) -> FormattedCafe {
    FormattedCafe {
        id: cafe.id,
        name: cafe.name.clone(),
        map_url: cafe.map_url.clone(),
        img_url: cafe.img_url.clone(),
        location: cafe.location.clone(),
        has_sockets: bool_to_icon(cafe.has_sockets),
        has_toilet: bool_to_icon(cafe.has_toilet),
        has_wifi: bool_to_icon(cafe.has_wifi),
        can_take_calls: bool_to_icon(cafe.can_take_calls),
        seats: cafe.seats.clone(),
        coffee_price: cafe.coffee_price.clone().unwrap_or_default(),
    }
}
