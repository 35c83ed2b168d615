//! In-memory token issuer handing out random UUID tokens.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::auth::{
    domain::AuthToken,
    ports::{TokenIssuer, TokenIssuerError, TokenIssuerResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory token table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenIssuer {
    tokens: Arc<RwLock<HashMap<AuthToken, UserId>>>,
}

impl InMemoryTokenIssuer {
    /// Creates an issuer with no active tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl std::fmt::Display) -> TokenIssuerError {
    TokenIssuerError::store(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TokenIssuer for InMemoryTokenIssuer {
    async fn issue(&self, user: UserId) -> TokenIssuerResult<AuthToken> {
        let token = AuthToken::new(Uuid::new_v4().to_string());
        self.tokens
            .write()
            .map_err(|err| poisoned(&err))?
            .insert(token.clone(), user);
        Ok(token)
    }

    async fn resolve(&self, token: &AuthToken) -> TokenIssuerResult<Option<UserId>> {
        Ok(self.tokens.read().map_err(|err| poisoned(&err))?.get(token).copied())
    }

    async fn revoke(&self, token: &AuthToken) -> TokenIssuerResult<bool> {
        Ok(self.tokens.write().map_err(|err| poisoned(&err))?.remove(token).is_some())
    }
}
