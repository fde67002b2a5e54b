use std::collections::HashSet;

use crate::errors::AppError;

/// Accepted bearer tokens. Built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl TokenSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for token in tokens {
            set.insert(token.into());
        }
        set
    }

    /// Parse a comma-separated list; entries are trimmed and blanks dropped.
    pub fn from_csv(raw: &str) -> Self {
        Self::new(raw.split(',').map(str::trim).filter(|t| !t.is_empty()))
    }

    pub fn insert(&mut self, token: String) {
        if self.lookup.insert(token.clone()) {
            self.ordered.push(token);
        }
    }

    /// First configured token, the one companion clients use by convention.
    pub fn primary(&self) -> Option<&str> {
        self.ordered.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    /// Check an `Authorization` header value against the set.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<(), AppError> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or(AppError::Unauthorized)?;

        if self.contains(token) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Extract the credential from `Bearer <token>`; the scheme is case-insensitive.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
