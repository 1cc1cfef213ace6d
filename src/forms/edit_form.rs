use super::validators::{self, MSG_INVALID_URL};
use super::{CafeFormData, FIELDS, FieldKind, FormErrors};
use crate::models::cafe::CafeChanges;

/// Edit schema: same fields as the creation form, all optional.
///
/// Blank text means "keep the stored value". Booleans are tri-state: a
/// missing or empty value keeps the stored flag, `y`/`n` set it explicitly.
pub struct EditForm;

impl EditForm {
    pub fn validate(data: &CafeFormData) -> Result<CafeChanges, FormErrors> {
        let mut errors = FormErrors::default();

        for field in FIELDS.iter().filter(|f| f.kind != FieldKind::Flag) {
            let raw = data.value(field.name);

            if validators::is_blank(Some(raw)) {
                continue;
            }
            if field.kind == FieldKind::Url && !validators::is_valid_url(raw) {
                errors.add(field.name, MSG_INVALID_URL);
            }
        }

        let text = |name: &str| {
            let raw = data.value(name);
            (!validators::is_blank(Some(raw))).then(|| raw.to_string())
        };

        let mut flag = |name: &'static str| {
            validators::parse_flag(Some(data.value(name))).unwrap_or_else(|msg| {
                errors.add(name, msg);
                None
            })
        };

        let has_toilet = flag("has_toilet");
        let has_wifi = flag("has_wifi");
        let has_sockets = flag("has_sockets");
        let can_take_calls = flag("can_take_calls");

        errors.into_result(CafeChanges {
            name: text("name"),
            map_url: text("map_url"),
            img_url: text("img_url"),
            location: text("location"),
            seats: text("seats"),
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price: text("coffee_price"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_submission_changes_nothing() {
        let changes = EditForm::validate(&CafeFormData::default()).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn seats_only() {
        let data = CafeFormData {
            seats: Some("0-10".into()),
            name: Some("   ".into()),
            ..Default::default()
        };

        let changes = EditForm::validate(&data).unwrap();

        assert_eq!(
            changes,
            CafeChanges {
                seats: Some("0-10".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn explicit_no_clears_a_flag() {
        let data = CafeFormData {
            has_wifi: Some("n".into()),
            has_toilet: Some("".into()),
            can_take_calls: Some("y".into()),
            ..Default::default()
        };

        let changes = EditForm::validate(&data).unwrap();

        assert_eq!(changes.has_wifi, Some(false));
        assert_eq!(changes.has_toilet, None);
        assert_eq!(changes.can_take_calls, Some(true));
        assert_eq!(changes.has_sockets, None);
    }

    #[test]
    fn present_url_must_still_be_valid() {
        let data = CafeFormData {
            img_url: Some("nope".into()),
            ..Default::default()
        };

        let errors = EditForm::validate(&data).unwrap_err();
        assert_eq!(errors.get("img_url"), [MSG_INVALID_URL]);
    }
}
