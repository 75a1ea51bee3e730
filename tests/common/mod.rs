//! Shared test helpers.

#![allow(dead_code)]

pub mod mocks;

use wingman::Credentials;

/// A fully populated set of credentials.
pub fn credentials() -> Credentials {
    Credentials {
        token: "tok-123".into(),
        user_id: "42".into(),
        conversation_id: "conv-1".into(),
        company_name: "https://acme.io".into(),
        company_description: "Anvils and rockets".into(),
    }
}
