use serde::{Deserialize, Serialize};

use super::clean_field;
use crate::config::FieldLimits;
use crate::Result;

/// Profile update submitted by a signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// Produce the sanitized copy that is safe to persist.
    ///
    /// Absent fields stay absent. A raw field over `max_input_bytes` rejects
    /// the whole update.
    pub fn sanitize(&self, limits: &FieldLimits) -> Result<ProfileUpdate> {
        let name = |field: &str, value: &Option<String>| {
            clean_field(
                field,
                value.as_deref(),
                limits.max_input_bytes,
                limits.name_max_length,
            )
        };
        let address = |field: &str, value: &Option<String>| {
            clean_field(
                field,
                value.as_deref(),
                limits.max_input_bytes,
                limits.address_max_length,
            )
        };

        Ok(ProfileUpdate {
            first_name: name("first_name", &self.first_name)?,
            last_name: name("last_name", &self.last_name)?,
            address: address("address", &self.address)?,
            city: address("city", &self.city)?,
            state: name("state", &self.state)?,
            zip_code: name("zip_code", &self.zip_code)?,
            phone: name("phone", &self.phone)?,
        })
    }
}
