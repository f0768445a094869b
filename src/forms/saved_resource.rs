use serde::{Deserialize, Serialize};

use super::clean_field;
use crate::config::FieldLimits;
use crate::sanitize::escape_attribute;
use crate::utils::validation::validate_link_url;
use crate::{Error, Result};

/// Bookmark of a directory resource with the user's private notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResourceRequest {
    pub resource_id: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl SavedResourceRequest {
    /// Validate and sanitize the bookmark.
    ///
    /// Notes go through the plain-text sanitizer and are capped at
    /// `notes_max_length`. A link must be an http(s) URL and is stored
    /// attribute-encoded, ready for an `href`.
    pub fn sanitize(&self, limits: &FieldLimits) -> Result<SavedResourceRequest> {
        if self.resource_id <= 0 {
            return Err(Error::Validation(
                "resource_id must be a positive integer".to_string(),
            ));
        }

        let notes = clean_field(
            "notes",
            self.notes.as_deref(),
            limits.max_input_bytes,
            limits.notes_max_length,
        )?;

        let link = match self.link.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let url = validate_link_url(raw)?;
                Some(escape_attribute(url.as_str()))
            }
        };

        Ok(SavedResourceRequest {
            resource_id: self.resource_id,
            notes,
            link,
        })
    }
}
