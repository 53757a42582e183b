use std::fmt;

/// Forecast shares Harvest's personal access tokens but scopes them to its
/// own account id.
#[derive(Clone)]
pub struct Credentials {
    account_id: i64,
    token: String,
}

impl Credentials {
    pub fn new(account_id: i64, token: impl Into<String>) -> Self {
        Self {
            account_id,
            token: token.into(),
        }
    }

    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    pub(crate) fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(crate) fn account_header(&self) -> String {
        self.account_id.to_string()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
