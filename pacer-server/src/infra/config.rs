use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::debug;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from the environment (and `.env` when
/// present). Command-line flags are applied on top by `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,

    /// `None` selects the in-memory store.
    pub database_url: Option<String>,

    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,

    /// Directory with the entry form and other static assets.
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            database_url: None,
            cors_allowed_origins: Vec::new(),
            static_dir: None,
        }
    }
}

impl Config {
    /// Call after the tracing subscriber is installed so the `.env` event
    /// is recorded.
    pub fn from_env() -> anyhow::Result<Self> {
        load_env_file(None);

        let server_port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|err| anyhow::anyhow!("invalid SERVER_PORT {raw:?}: {err}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            server_port,
            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            static_dir: env::var("STATIC_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Load `path`, or the nearest `.env` when `None`. A missing file is fine.
fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    let path = loaded.ok()?;
    debug!(path = %path.display(), "loaded environment file");
    Some(path)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn env_file_load_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "PACER_CONFIG_TEST_MARKER=loaded\n").unwrap();

        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();

        let loaded = tracing::subscriber::with_default(subscriber, || {
            load_env_file(Some(&env_file))
        });

        assert_eq!(loaded.as_deref(), Some(env_file.as_path()));
        assert_eq!(env::var("PACER_CONFIG_TEST_MARKER").unwrap(), "loaded");
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("loaded environment file"), "{output}");
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_file(Some(&dir.path().join("absent.env"))).is_none());
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:3000, ,http://localhost:5173 "),
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn default_binds_all_interfaces() {
        assert_eq!(Config::default().bind_address(), "0.0.0.0:3000");
    }
}
