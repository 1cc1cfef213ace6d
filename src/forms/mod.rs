//! Form schemas for the cafe catalogue.
//!
//! Both schemas read the same raw field set ([`CafeFormData`]) and either
//! produce a typed value or a [`FormErrors`] map listing every failing field.
//! Validation never stops at the first error.

pub mod cafe_form;
pub mod edit_form;
pub mod validators;

pub use cafe_form::CafeForm;
pub use edit_form::EditForm;

use crate::models::cafe::Cafe;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Raw submitted values, one per form field. A missing key is `None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CafeFormData {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl CafeFormData {
    /// Pre-fill values for the edit page, taken from the stored row
    /// (never from the display glyphs).
    pub fn from_cafe(cafe: &Cafe) -> Self {
        fn flag(b: bool) -> Option<String> {
            Some(if b { "y" } else { "n" }.to_string())
        }

        Self {
            name: Some(cafe.name.clone()),
            map_url: Some(cafe.map_url.clone()),
            img_url: Some(cafe.img_url.clone()),
            location: Some(cafe.location.clone()),
            seats: Some(cafe.seats.clone()),
            has_toilet: flag(cafe.has_toilet),
            has_wifi: flag(cafe.has_wifi),
            has_sockets: flag(cafe.has_sockets),
            can_take_calls: flag(cafe.can_take_calls),
            coffee_price: cafe.coffee_price.clone(),
        }
    }

    /// Value of a text field by name, used when re-rendering a form.
    pub fn value(&self, field: &str) -> &str {
        let v = match field {
            "name" => &self.name,
            "map_url" => &self.map_url,
            "img_url" => &self.img_url,
            "location" => &self.location,
            "seats" => &self.seats,
            "has_toilet" => &self.has_toilet,
            "has_wifi" => &self.has_wifi,
            "has_sockets" => &self.has_sockets,
            "can_take_calls" => &self.can_take_calls,
            "coffee_price" => &self.coffee_price,
            _ => return "",
        };
        v.as_deref().unwrap_or("")
    }
}

/// Form field description shared by both schemas.
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    Flag,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text }
    }

    const fn url(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Url }
    }

    const fn flag(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Flag }
    }
}

/// Fields in display order. Labels match the listing headings.
pub const FIELDS: [FieldSpec; 10] = [
    FieldSpec::text("name", "Name"),
    FieldSpec::url("map_url", "Map URL"),
    FieldSpec::url("img_url", "Image URL"),
    FieldSpec::text("location", "Location"),
    FieldSpec::flag("has_sockets", "Sockets"),
    FieldSpec::flag("has_toilet", "Toilet"),
    FieldSpec::flag("has_wifi", "WiFi"),
    FieldSpec::flag("can_take_calls", "Takes Calls"),
    FieldSpec::text("seats", "Seat Count"),
    FieldSpec::text("coffee_price", "Coffee Price"),
];

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// `Ok(value)` when no error was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msgs)| format!("{field}: {}", msgs.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
