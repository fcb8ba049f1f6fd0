//! API credential, loaded once and passed explicitly to the fetcher.

use crate::error::FetchError;
use std::fmt;

/// Default variable holding the job token in GitLab CI.
pub const DEFAULT_TOKEN_ENV: &str = "CI_JOB_TOKEN";

/// Opaque token sent verbatim as `PRIVATE-TOKEN`. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read `var` from the process environment.
    /// A variable that is unset or not valid Unicode counts as missing.
    pub fn from_env(var: &str) -> Result<Self, FetchError> {
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    /// Resolve `var` through `lookup` instead of the real environment.
    /// Values containing CR, LF or NUL are rejected.
    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self, FetchError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(value) => {
                let token = Self(value);
                if !token.is_header_safe() {
                    return Err(FetchError::InvalidToken);
                }
                Ok(token)
            }
            None => Err(FetchError::MissingToken {
                var: var.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// False if the value would break out of its header line.
    pub fn is_header_safe(&self) -> bool {
        !self.0.contains(&['\r', '\n', '\0'][..])
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}
