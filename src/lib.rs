//! BEGLES site data core.
//!
//! The data, persistence, and workflow layer behind the BEGLES private
//! social club site: three persisted documents (theme, party list, site
//! info), a visitor/admin access gate, and the party editing workflow. The
//! UI that renders these is a separate concern and lives outside this crate.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod errors;
pub mod media;
pub mod models;
pub mod state;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::AccessGate;
use config::Config;
use errors::AppError;
use state::SiteState;
use store::{SessionStore, SlotStore};

/// Which top-level surface to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Public,
    Admin,
}

/// Application aggregate: the state container, the access gate, and the
/// session store they share.
pub struct App {
    pub site: SiteState,
    pub gate: AccessGate,
    pub session: SessionStore,
    pub config: Arc<Config>,
}

impl App {
    /// Open the store, load (or default) the three slots, and seed the gate
    /// from any surviving admin session.
    pub async fn bootstrap(config: Config) -> Result<Self, AppError> {
        tracing::info!("Starting BEGLES data core");
        tracing::info!("Store path: {:?}", config.store_path);

        if config.uses_default_credentials() {
            tracing::warn!(
                "No manager credentials configured (BEGLES_ADMIN_ID / BEGLES_ADMIN_SECRET). Using built-in defaults."
            );
        }

        let pool = store::init_store(&config.store_path).await?;
        let slots = SlotStore::new(pool.clone());
        let session = SessionStore::new(pool);

        let site = SiteState::load(slots).await?;
        let gate = AccessGate::resume(&config, &session).await?;

        Ok(Self {
            site,
            gate,
            session,
            config: Arc::new(config),
        })
    }

    /// The surface the top level should render right now.
    pub fn surface(&self) -> Surface {
        if self.gate.is_admin() {
            Surface::Admin
        } else {
            Surface::Public
        }
    }
}

/// Initialize logging for a binary embedding this crate.
pub fn init_logging(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests;
