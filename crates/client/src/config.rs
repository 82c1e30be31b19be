//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings owned by the terminal client itself.
///
/// Runtime pacing and seeding live in [`runtime::RuntimeConfig`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding optional `config.toml` / `tables.toml` overrides.
    pub data_dir: PathBuf,
    /// Names the log sub-directory; a timestamp is used when unset.
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_DATA_DIR` - Content override directory (default: platform data dir)
    /// - `DUNGEON_SESSION_ID` - Log session name (default: `session_<unix time>`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("DUNGEON_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(session) = read_env::<String>("DUNGEON_SESSION_ID") {
            config.session_id = Some(session);
        }

        config
    }
}

/// Platform data directory, e.g. `~/.local/share/dungeon` on Linux.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
