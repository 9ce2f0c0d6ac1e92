use std::env;

use thiserror::Error;

/// Bearer credentials for the Harvest v2 API. Every request carries the
/// access token and the numeric account id as headers.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub account_id: String,
    pub token: String,
}

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("Missing account id")]
    MissingAccountId,
    #[error("Missing access token")]
    MissingAccessToken,
}

impl Credentials {
    pub fn new(
        account_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let account_id = account_id.into();
        let token = token.into();

        if account_id.is_empty() {
            return Err(CredentialsError::MissingAccountId);
        }
        if token.is_empty() {
            return Err(CredentialsError::MissingAccessToken);
        }

        Ok(Self { account_id, token })
    }

    /// Creates credentials from the environment variables `HARVEST_ACCOUNT_ID`
    /// and `HARVEST_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let account_id =
            env::var("HARVEST_ACCOUNT_ID").map_err(|_| CredentialsError::MissingAccountId)?;
        let token =
            env::var("HARVEST_ACCESS_TOKEN").map_err(|_| CredentialsError::MissingAccessToken)?;

        Self::new(account_id, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_account_id() {
        let result = Credentials::new("", "token");
        assert!(matches!(result, Err(CredentialsError::MissingAccountId)));
    }

    #[test]
    fn rejects_empty_token() {
        let result = Credentials::new("12345", "");
        assert!(matches!(result, Err(CredentialsError::MissingAccessToken)));
    }
}
