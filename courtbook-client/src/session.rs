//! On-disk session storage for the booking service token.
//!
//! The token holder itself never touches storage; this module is the
//! collaborator that carries a login across invocations. Sessions are
//! stored per endpoint at:
//!   ~/.config/courtbook/session/{endpoint_slug}.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

pub fn base_dir() -> ClientResult<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| ClientError::Storage("Could not determine config directory".into()))?
        .join("courtbook"))
}

/// A stored login for one booking server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub endpoint: String,
    pub token: String,
}

impl StoredSession {
    fn path_for_endpoint(endpoint: &str) -> ClientResult<PathBuf> {
        let slug = endpoint.replace(['/', '\\', ':', '@', '.'], "_");
        Ok(base_dir()?.join("session").join(format!("{slug}.toml")))
    }

    fn path(&self) -> ClientResult<PathBuf> {
        Self::path_for_endpoint(&self.endpoint)
    }

    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        StoredSession {
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    pub fn load(endpoint: &str) -> ClientResult<Self> {
        let path = Self::path_for_endpoint(endpoint)?;

        if !path.exists() {
            return Err(ClientError::Storage(format!(
                "No stored session for {endpoint}"
            )));
        }

        let contents = std::fs::read_to_string(&path)?;

        toml::from_str(&contents).map_err(|e| {
            ClientError::Storage(format!("Could not parse session {}: {e}", path.display()))
        })
    }

    pub fn save(&self) -> ClientResult<()> {
        let path = self.path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ClientError::Storage(format!("Could not serialize session: {e}")))?;

        std::fs::write(&path, contents)?;

        // Owner-only (0600) since the file contains the bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Remove the stored session for `endpoint`. Deleting a session that
    /// does not exist is fine.
    pub fn delete(endpoint: &str) -> ClientResult<()> {
        let path = Self::path_for_endpoint(endpoint)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
