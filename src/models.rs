use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name given to freshly added draft profiles
pub const NEW_PROFILE_NAME: &str = "new AWS profile";

/// One AWS EC2 credential set, either persisted or a local draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AwsProfile {
    /// Server-assigned identifier. Absent while the profile is a draft.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "accessKeyId", default)]
    pub access_key_id: String,

    #[serde(rename = "secretAccessKey", default)]
    pub secret_access_key: String,

    #[serde(rename = "regionName", default)]
    pub region_name: String,

    #[serde(rename = "availabilityZone", default)]
    pub availability_zone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl AwsProfile {
    /// Template appended by the add action
    pub fn draft() -> Self {
        Self {
            name: NEW_PROFILE_NAME.to_string(),
            region_name: "us-east-1".to_string(),
            availability_zone: "us-east-1a".to_string(),
            ..Self::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    /// Secret with everything but the last four characters masked
    pub fn masked_secret(&self) -> String {
        mask(&self.secret_access_key)
    }

    pub fn status(&self) -> ProfileStatus {
        if self.is_persisted() {
            ProfileStatus::Persisted
        } else {
            ProfileStatus::Draft
        }
    }
}

fn mask(value: &str) -> String {
    let len = value.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let tail: String = value.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), tail)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Draft,
    Persisted,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileStatus::Draft => "DRAFT",
            ProfileStatus::Persisted => "SAVED",
        }
    }
}

/// The logged-in user, used for the breadcrumb
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
    #[serde(default)]
    pub admin: bool,
}
