use serde::{Deserialize, Serialize};

use super::macros::{flag_enum, string_enum};

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum EventKind {
        /// Recurring weekly service, generated per month.
        #[default]
        Sunday => "sunday",
        Special => "special",
    }
}

flag_enum! {
    /// Soft-delete state shared by teams and members.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ActiveState {
        #[default]
        Active => true,
        Inactive => false,
    }
}

flag_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum EventStatus {
        Archived => true,
        #[default]
        Active => false,
    }
}

impl ActiveState {
    pub fn activate(self) -> Self {
        ActiveState::Active
    }

    pub fn deactivate(self) -> Self {
        ActiveState::Inactive
    }

    pub fn is_active(&self) -> bool {
        self.as_flag()
    }
}

impl EventStatus {
    pub fn archive(self) -> Self {
        EventStatus::Archived
    }

    pub fn unarchive(self) -> Self {
        EventStatus::Active
    }

    pub fn is_archived(&self) -> bool {
        self.as_flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_parses_case_insensitively() {
        assert_eq!("Sunday".parse::<EventKind>(), Ok(EventKind::Sunday));
        assert_eq!("special".parse::<EventKind>(), Ok(EventKind::Special));
        assert!("weekly".parse::<EventKind>().is_err());
        assert_eq!(EventKind::Special.to_string(), "special");
    }

    #[test]
    fn transitions_are_named() {
        let status = EventStatus::default();
        assert!(!status.is_archived());
        assert!(status.archive().is_archived());
        assert_eq!(status.archive().unarchive(), EventStatus::Active);

        let state = ActiveState::default();
        assert!(state.is_active());
        assert_eq!(state.deactivate(), ActiveState::Inactive);
        assert!(state.deactivate().activate().is_active());
    }

    #[test]
    fn flags_map_to_columns() {
        assert!(EventStatus::Archived.as_flag());
        assert!(!EventStatus::Active.as_flag());
        assert_eq!(ActiveState::from_flag(false), ActiveState::Inactive);
    }

    #[test]
    fn serialized_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_value(EventStatus::Archived).unwrap(),
            serde_json::json!("archived")
        );
        assert_eq!(
            serde_json::to_value(ActiveState::Inactive).unwrap(),
            serde_json::json!("inactive")
        );
        assert_eq!(
            serde_json::from_value::<EventKind>(serde_json::json!("special")).unwrap(),
            EventKind::Special
        );
    }
}
