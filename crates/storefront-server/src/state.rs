//! Shared application state.

use std::sync::Arc;

use storefront_data::CatalogClient;
use storefront_session::SessionConfig;

/// State cloned into every handler.
///
/// Deliberately small: the catalog client is stateless and the session
/// config is read-only. All cart state lives in the client's cookie.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub sessions: Arc<SessionConfig>,
}

impl AppState {
    pub fn new(catalog: CatalogClient, sessions: SessionConfig) -> Self {
        Self {
            catalog,
            sessions: Arc::new(sessions),
        }
    }
}
