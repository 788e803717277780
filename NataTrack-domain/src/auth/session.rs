use serde::{Deserialize, Serialize};

/// Fallback greeting when neither the profile nor the identity provider
/// supplies a name
pub const FALLBACK_NAME: &str = "Mom-to-be";

/// Session state consumed from the external identity provider.
///
/// Authentication itself happens outside this codebase; all the application
/// ever sees is whether a user is signed in and, when they are, an opaque
/// display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Whether the identity provider reports a signed-in user
    pub signed_in: bool,

    /// Display name supplied by the identity provider, if any
    pub display_name: Option<String>,
}

impl Session {
    /// A signed-in session with an optional provider-supplied name
    pub fn signed_in(display_name: Option<String>) -> Self {
        Self {
            signed_in: true,
            display_name,
        }
    }

    /// A signed-out session
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            display_name: None,
        }
    }
}

/// Resolve the name used in greetings: the onboarded profile name first,
/// then the identity provider's display name, then the fixed fallback.
pub fn greeting_name<'a>(profile_name: Option<&'a str>, session: &'a Session) -> &'a str {
    profile_name
        .filter(|name| !name.trim().is_empty())
        .or(session.display_name.as_deref())
        .unwrap_or(FALLBACK_NAME)
}
