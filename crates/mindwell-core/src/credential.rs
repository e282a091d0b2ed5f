//! Generation-backend credential and the two admission rules applied to it.

use serde::Deserialize;
use std::fmt;

/// Sentinel value shipped in sample `.env` files; never a real key.
pub const PLACEHOLDER_CREDENTIAL: &str = "happy";

const GUIDANCE_MIN_LEN: usize = 10;
const PLAN_MIN_LEN: usize = 20;
const PLAN_KEY_PREFIX: &str = "sk-";

/// API key for the generation backend. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<redacted>, len={})", self.0.len())
    }
}

/// Which handler is asking. The rules differ and are kept separate on purpose:
/// the structured-plan rule is stricter than the guidance rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Mood analysis: non-empty, not the placeholder, at least 10 chars.
    Guidance,
    /// Wellness plan: non-empty, not the placeholder, at least 20 chars, `sk-` prefix.
    StructuredPlan,
}

impl CredentialPolicy {
    pub fn admits(self, credential: Option<&Credential>) -> bool {
        let Some(key) = credential.map(Credential::expose) else {
            return false;
        };
        if key.is_empty() || key == PLACEHOLDER_CREDENTIAL {
            return false;
        }
        match self {
            CredentialPolicy::Guidance => key.len() >= GUIDANCE_MIN_LEN,
            CredentialPolicy::StructuredPlan => {
                key.len() >= PLAN_MIN_LEN && key.starts_with(PLAN_KEY_PREFIX)
            }
        }
    }
}
