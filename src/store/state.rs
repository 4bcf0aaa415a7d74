use crate::models::{AwsProfile, User};
use std::collections::HashMap;

/// Whole application state held by the store
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub preferences: Preferences,
    pub auth: AuthState,
    pub network: NetworkState,
}

#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub aws: AwsPreferences,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwsPreferences {
    /// Index into `list` of the profile shown in the editor
    pub active: usize,
    pub list: Vec<AwsProfile>,
    /// True while a save or remove is in flight
    pub pending: bool,
}

impl AwsPreferences {
    /// Keep `active` pointing into `list` (0 when empty)
    pub fn clamp_active(&mut self) {
        if self.list.is_empty() {
            self.active = 0;
        } else if self.active >= self.list.len() {
            self.active = self.list.len() - 1;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkError {
    pub message: String,
    /// Set once the error has been acknowledged and should no longer be shown
    pub invalid: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NetworkState {
    pub errors: HashMap<String, NetworkError>,
}

impl NetworkState {
    pub fn record(&mut self, key: &str, message: String) {
        self.errors.insert(
            key.to_string(),
            NetworkError {
                message,
                invalid: false,
            },
        );
    }

    pub fn clear(&mut self, key: &str) {
        self.errors.remove(key);
    }

    pub fn invalidate(&mut self, keys: &[String]) {
        for key in keys {
            if let Some(error) = self.errors.get_mut(key) {
                error.invalid = true;
            }
        }
    }
}

/// Message of the first still-valid network error recorded under one of `keys`
pub fn get_network_error(state: &AppState, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| state.network.errors.get(*key))
        .find(|error| !error.invalid)
        .map(|error| error.message.clone())
}
