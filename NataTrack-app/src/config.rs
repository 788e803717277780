use std::env;
use std::path::PathBuf;

use nata_track_domain::auth::Session;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "NATATRACK_DATA_DIR";

/// Environment variable carrying the identity provider's display name
pub const USER_ENV: &str = "NATATRACK_USER";

/// Environment variable carrying the identity provider's signed-in state
pub const SIGNED_IN_ENV: &str = "NATATRACK_SIGNED_IN";

/// Directory name used under the home directory by default
const DEFAULT_DIR_NAME: &str = ".natatrack";

/// Application configuration resolved from flags and the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the blob store writes into
    pub data_dir: PathBuf,

    /// Session state handed over by the external identity provider
    pub session: Session,
}

impl AppConfig {
    /// Resolve configuration: an explicit flag wins over the environment,
    /// which wins over `~/.natatrack`.
    pub fn from_env(data_dir_override: Option<PathBuf>) -> Self {
        let data_dir = data_dir_override
            .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| match env::var_os("HOME") {
                Some(home) => PathBuf::from(home).join(DEFAULT_DIR_NAME),
                None => PathBuf::from(DEFAULT_DIR_NAME),
            });

        // The identity provider boundary: a signed-in flag plus an opaque
        // display name. A local session counts as signed in unless the
        // provider explicitly says otherwise.
        let signed_in = env::var(SIGNED_IN_ENV)
            .map(|v| v != "false")
            .unwrap_or(true);
        let session = if signed_in {
            Session::signed_in(env::var(USER_ENV).ok().filter(|v| !v.is_empty()))
        } else {
            Session::signed_out()
        };

        Self { data_dir, session }
    }

    /// Configuration pinned to an explicit directory and session, for tests
    pub fn with(data_dir: PathBuf, session: Session) -> Self {
        Self { data_dir, session }
    }
}
