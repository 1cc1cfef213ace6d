/// A stored cafe row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// A cafe that has passed the creation form and has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Partial overwrite produced by the edit form.
/// `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeChanges {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<bool>,
    pub has_wifi: Option<bool>,
    pub has_sockets: Option<bool>,
    pub can_take_calls: Option<bool>,
    pub coffee_price: Option<String>,
}

impl CafeChanges {
    pub fn is_empty(&self) -> bool {
        *self == CafeChanges::default()
    }

    /// Apply every present field onto `cafe`. Returns the names of the
    /// columns that actually changed.
    pub fn apply_to(self, cafe: &mut Cafe) -> Vec<&'static str> {
        let mut changed = Vec::new();

        fn set<T: PartialEq>(
            slot: &mut T,
            value: Option<T>,
            column: &'static str,
            changed: &mut Vec<&'static str>,
        ) {
            if let Some(v) = value
                && *slot != v
            {
                *slot = v;
                changed.push(column);
            }
        }

        set(&mut cafe.name, self.name, "name", &mut changed);
        set(&mut cafe.map_url, self.map_url, "map_url", &mut changed);
        set(&mut cafe.img_url, self.img_url, "img_url", &mut changed);
        set(&mut cafe.location, self.location, "location", &mut changed);
        set(&mut cafe.seats, self.seats, "seats", &mut changed);
        set(&mut cafe.has_toilet, self.has_toilet, "has_toilet", &mut changed);
        set(&mut cafe.has_wifi, self.has_wifi, "has_wifi", &mut changed);
        set(&mut cafe.has_sockets, self.has_sockets, "has_sockets", &mut changed);
        set(
            &mut cafe.can_take_calls,
            self.can_take_calls,
            "can_take_calls",
            &mut changed,
        );
        set(
            &mut cafe.coffee_price,
            self.coffee_price.map(Some),
            "coffee_price",
            &mut changed,
        );

        changed
    }
}
