// Action descriptions consumed by the store
use crate::models::AwsProfile;

/// Network error key for failed saves
pub const SAVE_AWS_PROFILE: &str = "save_aws_profile";
/// Network error key for failed removals
pub const REMOVE_AWS_PROFILE: &str = "remove_aws_profile";
/// Network error key for failed list fetches
pub const FETCH_AWS_PROFILES: &str = "fetch_aws_profiles";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchAwsProfiles,
    AddAwsProfile,
    UpdateAwsProfile {
        index: usize,
        profile: AwsProfile,
        save: bool,
    },
    RemoveAwsProfile {
        index: usize,
        profile: AwsProfile,
    },
    UpdateActiveProfile(usize),
    InvalidateErrors(Vec<String>),
}

pub fn fetch_aws_profiles() -> Action {
    Action::FetchAwsProfiles
}

pub fn add_aws_profile() -> Action {
    Action::AddAwsProfile
}

pub fn update_aws_profile(index: usize, profile: AwsProfile, save: bool) -> Action {
    Action::UpdateAwsProfile {
        index,
        profile,
        save,
    }
}

pub fn remove_aws_profile(index: usize, profile: AwsProfile) -> Action {
    Action::RemoveAwsProfile { index, profile }
}

pub fn update_active_profile(index: usize) -> Action {
    Action::UpdateActiveProfile(index)
}

pub fn invalidate_errors(keys: &[&str]) -> Action {
    Action::InvalidateErrors(keys.iter().map(|key| key.to_string()).collect())
}
