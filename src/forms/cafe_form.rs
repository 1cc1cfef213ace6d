use super::validators::{self, MSG_INVALID_URL, MSG_REQUIRED};
use super::{CafeFormData, FIELDS, FieldKind, FormErrors};
use crate::models::cafe::NewCafe;

/// Creation schema: every descriptive field is mandatory, URLs must be
/// well formed, the four amenities are plain checkboxes. Text is otherwise
/// unconstrained.
pub struct CafeForm;

impl CafeForm {
    pub fn validate(data: &CafeFormData) -> Result<NewCafe, FormErrors> {
        let mut errors = FormErrors::default();

        for field in FIELDS.iter().filter(|f| f.kind != FieldKind::Flag) {
            let raw = data.value(field.name);

            if validators::is_blank(Some(raw)) {
                errors.add(field.name, MSG_REQUIRED);
                continue;
            }
            if field.kind == FieldKind::Url && !validators::is_valid_url(raw) {
                errors.add(field.name, MSG_INVALID_URL);
            }
        }

        let checkbox = |name: &str| validators::is_checked(data.value(name));

        let has_toilet = checkbox("has_toilet");
        let has_wifi = checkbox("has_wifi");
        let has_sockets = checkbox("has_sockets");
        let can_take_calls = checkbox("can_take_calls");

        errors.into_result(NewCafe {
            name: data.value("name").to_string(),
            map_url: data.value("map_url").to_string(),
            img_url: data.value("img_url").to_string(),
            location: data.value("location").to_string(),
            seats: data.value("seats").to_string(),
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price: Some(data.value("coffee_price").to_string()),
        })
    }
}
