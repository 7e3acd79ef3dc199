//! Shared-secret check for `/lookup`.
//!
//! The key may arrive in the `x-api-key` header or the `key` query
//! parameter. The header wins when it is present and non-empty.

use rcprism_core::error::{Result, RcPrismError};

use crate::config::AuthSection;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, Default)]
pub struct ApiKeyPolicy {
    expected: Option<String>,
}

impl ApiKeyPolicy {
    /// An empty configured key is treated as "no key".
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected: expected.filter(|k| !k.is_empty()),
        }
    }

    pub fn from_config(auth: &AuthSection) -> Self {
        Self::new(auth.api_key.clone())
    }

    pub fn enabled(&self) -> bool {
        self.expected.is_some()
    }

    /// Admit or reject a request given the key candidates it carried.
    pub fn check(&self, header: Option<&str>, query: Option<&str>) -> Result<()> {
        let Some(expected) = self.expected.as_deref() else {
            return Ok(());
        };

        let provided = header
            .filter(|k| !k.is_empty())
            .or(query)
            .filter(|k| !k.is_empty());

        match provided {
            Some(k) if k == expected => Ok(()),
            _ => Err(RcPrismError::AuthFailed),
        }
    }
}
