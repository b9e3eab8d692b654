use api::fiat_currency::FiatCurrency;
use api::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

/// Read-only settings every screen needs, fixed at startup.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub currency: FiatCurrency,
    pub dialog_title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: &UserPrefs) -> Self {
        let display = prefs.display_preference();
        Self(Arc::new(AppStateData {
            currency: display.currency(),
            dialog_title: display.dialog_title().to_string(),
        }))
    }
}
