// Binds the preferences page to the store
use crate::store::actions::{self, REMOVE_AWS_PROFILE, SAVE_AWS_PROFILE};
use crate::store::{get_network_error, AppState, ProfileBackend, Store};
use crate::models::AwsProfile;
use crate::ui::prefs::{PrefsActions, PrefsProps};

/// Network errors the page surfaces and can invalidate
pub const NETWORK_ERROR_KEYS: [&str; 2] = [SAVE_AWS_PROFILE, REMOVE_AWS_PROFILE];

pub fn map_state_to_props(state: &AppState) -> PrefsProps {
    let aws = &state.preferences.aws;
    PrefsProps {
        active: aws.active,
        list: aws.list.clone(),
        error: get_network_error(state, &NETWORK_ERROR_KEYS),
        buttons_disabled: aws.pending,
        user: state.auth.user.clone(),
    }
}

impl<B: ProfileBackend> PrefsActions for Store<B> {
    fn update_item(&mut self, index: usize, profile: AwsProfile, save: bool) {
        self.dispatch(actions::update_aws_profile(index, profile, save));
    }

    fn active_change(&mut self, index: usize) {
        self.dispatch(actions::update_active_profile(index));
    }

    fn add_item(&mut self) {
        self.dispatch(actions::add_aws_profile());
    }

    fn remove_item(&mut self, index: usize, profile: AwsProfile) {
        self.dispatch(actions::remove_aws_profile(index, profile));
    }

    fn mount(&mut self) {
        self.dispatch(actions::fetch_aws_profiles());
    }

    fn invalidate_errors(&mut self) {
        self.dispatch(actions::invalidate_errors(&NETWORK_ERROR_KEYS));
    }
}
