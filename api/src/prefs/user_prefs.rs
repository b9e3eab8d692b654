use super::display_preference::DisplayPreference;
use serde::Deserialize;
use serde::Serialize;

/// All user prefs. Read once at startup and provided to the UI as context.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    display_preference: DisplayPreference,
}

impl UserPrefs {
    pub fn new(display_preference: DisplayPreference) -> Self {
        Self { display_preference }
    }

    pub fn display_preference(&self) -> &DisplayPreference {
        &self.display_preference
    }
}
