//! Command implementations.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod contact;
pub mod products;
pub mod theme;

use std::sync::Arc;

use robotech_client::{
    ApiClient, ApiError, CartStore, ClientConfig, FileStore, KeyValueStore, SessionStore,
    ThemeStore,
};

/// Everything the commands need, built once at startup.
///
/// Stores share one file-backed key-value store under the configured
/// data directory; the session is restored (and verified) before any
/// command runs.
pub struct AppContext {
    pub config: ClientConfig,
    pub api: ApiClient,
    pub session: SessionStore,
    pub cart: CartStore,
    pub theme: ThemeStore,
}

impl AppContext {
    /// Build configuration, storage, client, and stores.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the data
    /// directory cannot be created.
    pub async fn init() -> Result<Self, Box<dyn std::error::Error>> {
        let config = ClientConfig::from_env()?;
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir)?);

        let api = ApiClient::new(&config);
        let session = SessionStore::new(Arc::clone(&storage), api.clone());
        session.restore().await;

        let cart = CartStore::load(Arc::clone(&storage));
        let theme = ThemeStore::load(storage);

        Ok(Self {
            config,
            api,
            session,
            cart,
            theme,
        })
    }
}

/// Map an API error from an authenticated call; a 401 clears the session
/// and becomes a log-in-again hint.
pub(crate) fn fail_closed(ctx: &AppContext, e: ApiError) -> Box<dyn std::error::Error> {
    if matches!(e, ApiError::Unauthorized) {
        ctx.session.logout();
        return "session expired - log in again with `robo auth login`".into();
    }
    e.into()
}
