// src/state.rs

use crate::{
    client::ApiClient, config::Config, error::AppError, notify::ToastQueue, routes::History,
    session::SessionStore,
};

/// Everything a page needs: configuration, the REST client, the stored
/// session, the toast queue and navigation history.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub session: SessionStore,
    pub toasts: ToastQueue,
    pub history: History,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let session = SessionStore::load(&config.session_file)?;
        let api = ApiClient::new(&config, &session)?;
        Ok(Self {
            config,
            api,
            session,
            toasts: ToastQueue::new(),
            history: History::new(),
        })
    }

    /// Rebuilds the client so it picks up the current token.
    /// Login and logout only reach requests sent after this.
    pub fn reload(&mut self) -> Result<(), AppError> {
        self.api = ApiClient::new(&self.config, &self.session)?;
        Ok(())
    }
}
