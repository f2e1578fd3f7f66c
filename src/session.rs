// src/session.rs

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::AppError, models::user::Role, utils::jwt::peek_claims};

/// The signed-in user: the bearer token and who it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<Role>,
    pub username: Option<String>,
}

/// Session persisted as a small JSON file. `path == None` keeps it in memory.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    session: Session,
}

impl SessionStore {
    /// Reads the session file. A missing file is an anonymous session.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let session = match fs::read_to_string(&path) {
            Ok(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)?,
            Ok(_) => Session::default(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Session::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("session loaded from {}", path.display());
        Ok(Self {
            path: Some(path),
            session,
        })
    }

    pub fn in_memory(session: Session) -> Self {
        Self {
            path: None,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn save(&mut self, session: Session) -> Result<(), AppError> {
        self.session = session;
        self.persist()
    }

    /// Logout: forget everything.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.session = Session::default();
        match &self.path {
            Some(path) if path.exists() => fs::remove_file(path).map_err(Into::into),
            _ => Ok(()),
        }
    }

    /// Role from the login response, else from the token's claims.
    pub fn role(&self) -> Option<Role> {
        self.session.role.or_else(|| {
            let token = self.token()?;
            peek_claims(token).ok()?.role()
        })
    }

    /// A token is present and, if it carries `exp`, has not expired.
    /// Opaque (non-JWT) tokens are trusted until the backend says otherwise.
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Some(token) if !token.is_empty() => match peek_claims(token) {
                Ok(claims) => !claims.is_expired(),
                Err(_) => true,
            },
            _ => false,
        }
    }

    fn persist(&self) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.session)?)?;
        tracing::debug!("session written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("careernexus-session-{}", std::process::id()))
            .join("session.json")
    }

    #[test]
    fn missing_file_is_anonymous() {
        let store = SessionStore::load("/definitely/not/here/session.json").unwrap();
        assert_eq!(store.session(), &Session::default());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn save_then_load_then_clear() {
        let path = temp_path();
        let mut store = SessionStore::load(&path).unwrap();
        store
            .save(Session {
                token: Some("opaque-token".into()),
                user_id: Some("9".into()),
                role: Some(Role::Student),
                username: Some("asha".into()),
            })
            .unwrap();

        let reloaded = SessionStore::load(&path).unwrap();
        assert_eq!(reloaded.role(), Some(Role::Student));
        assert!(reloaded.is_authenticated());

        let mut reloaded = reloaded;
        reloaded.clear().unwrap();
        assert!(!path.exists());
        assert!(!reloaded.is_authenticated());
    }
}
