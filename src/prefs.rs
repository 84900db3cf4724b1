use serde::{Deserialize, Serialize};

use crate::persist::Persistence;

/// Storage key for the column-visibility preferences.
pub const COLUMN_PREFS_KEY: &str = "admin-column-visibility";

/// Which dashboard columns the admin wants visible. Wire names stay
/// camelCase to match the JSON object the dashboard has always stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnPrefs {
    pub name: bool,
    pub email: bool,
    pub linkedin: bool,
    pub portfolio: bool,
    pub role_type: bool,
    pub seeking: bool,
    pub location: bool,
    pub bio: bool,
    pub submission_date: bool,
    pub actions: bool,
}

impl Default for ColumnPrefs {
    fn default() -> Self {
        Self {
            name: true,
            email: true,
            linkedin: true,
            portfolio: true,
            role_type: true,
            seeking: true,
            location: true,
            bio: true,
            submission_date: true,
            actions: true,
        }
    }
}

impl ColumnPrefs {
    /// The pared-down preset behind the dashboard's "Essential" shortcut.
    pub fn essential() -> Self {
        Self {
            email: false,
            linkedin: false,
            seeking: false,
            bio: false,
            ..Self::default()
        }
    }

    /// Load saved preferences, falling back to the all-visible default when
    /// nothing is stored or the stored value does not parse.
    pub fn load(persist: &dyn Persistence) -> Self {
        persist
            .get(COLUMN_PREFS_KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, persist: &dyn Persistence) {
        match serde_json::to_value(self) {
            Ok(value) => persist.set(COLUMN_PREFS_KEY, value),
            Err(e) => tracing::warn!("failed to serialize column preferences: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::Ephemeral;
    use serde_json::json;

    #[test]
    fn defaults_show_every_column() {
        let prefs = ColumnPrefs::default();
        assert!(prefs.name && prefs.email && prefs.bio && prefs.actions);
    }

    #[test]
    fn essential_preset_hides_secondary_columns() {
        let prefs = ColumnPrefs::essential();
        assert!(prefs.name && prefs.portfolio && prefs.role_type);
        assert!(prefs.location && prefs.submission_date && prefs.actions);
        assert!(!prefs.email && !prefs.linkedin && !prefs.seeking && !prefs.bio);
    }

    #[test]
    fn round_trips_through_persistence_with_camel_case_keys() {
        let persist = Ephemeral::new();
        let prefs = ColumnPrefs::essential();
        prefs.save(&persist);

        let stored = persist.get(COLUMN_PREFS_KEY).unwrap();
        assert_eq!(stored["roleType"], json!(true));
        assert_eq!(stored["submissionDate"], json!(true));
        assert_eq!(stored["email"], json!(false));

        assert_eq!(ColumnPrefs::load(&persist), prefs);
    }

    #[test]
    fn unparsable_saved_value_falls_back_to_defaults() {
        let persist = Ephemeral::new();
        persist.set(COLUMN_PREFS_KEY, json!("garbage"));
        assert_eq!(ColumnPrefs::load(&persist), ColumnPrefs::default());
    }

    #[test]
    fn missing_fields_take_their_defaults() {
        let persist = Ephemeral::new();
        persist.set(COLUMN_PREFS_KEY, json!({"email": false}));
        let prefs = ColumnPrefs::load(&persist);
        assert!(!prefs.email);
        assert!(prefs.name && prefs.actions);
    }
}
