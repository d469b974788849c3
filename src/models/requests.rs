//! Request DTOs for the cache server API
//!
//! Defines the query parameters accepted by the key-value endpoint.

use serde::Deserialize;

use crate::cache::{MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
use crate::error::{ApiError, Result};

/// Query string for `GET /crappykv`
///
/// # Fields
/// - `key`: The cache key (required, non-empty)
/// - `value`: When present, stored under `key`; an empty string is a valid value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KvQuery {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl KvQuery {
    /// Validates the query and splits it into key and optional value.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn into_parts(self) -> Result<(String, Option<String>)> {
        let key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ApiError::MissingKey),
        };

        if key.chars().count() > MAX_KEY_LENGTH {
            return Err(ApiError::ValueTooLong {
                max: MAX_KEY_LENGTH,
            });
        }

        if let Some(value) = &self.value {
            if value.chars().count() > MAX_VALUE_LENGTH {
                return Err(ApiError::ValueTooLong {
                    max: MAX_VALUE_LENGTH,
                });
            }
        }

        Ok((key, self.value))
    }
}
