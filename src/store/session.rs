use crate::core::gate::Session;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    used: BTreeSet<String>,
}

/// Persists the one-shot flag of token-bound sessions between invocations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Session for `token`; no token gives a fresh anonymous session.
    pub fn open(&self, token: Option<&str>) -> Session {
        match token {
            None => Session::anonymous(),
            Some(t) => {
                let used = self.read().used.contains(t);
                Session::restore(t, used)
            }
        }
    }

    /// Persist a used token-bound session. Anonymous sessions are not stored.
    pub fn save(&self, session: &Session) -> AppResult<()> {
        let Some(token) = session.token() else {
            return Ok(());
        };
        if !session.is_used() {
            return Ok(());
        }

        let mut file = self.read();
        if file.used.insert(token.to_string()) {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        }
        Ok(())
    }

    fn read(&self) -> SessionFile {
        if !self.path.exists() {
            return SessionFile::default();
        }
        fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
            .unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "session file unreadable, starting fresh");
                SessionFile::default()
            })
    }
}
