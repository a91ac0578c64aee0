//! Visitor/admin access gate.
//!
//! Implements constant-time comparison to mitigate timing attacks.
//!
//! The gate only decides which surface the top level renders. It is not a
//! security boundary: all documents stay equally readable and writable in
//! the client runtime whatever the mode.

use std::time::{Duration, Instant};

use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::AppError;
use crate::store::SessionStore;

/// How long a failed sign-in keeps the error indicator raised.
pub const LOGIN_ERROR_FLASH: Duration = Duration::from_millis(500);

/// Which surface the top level should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Visitor,
    Admin,
}

/// Two-state gate between the public catalog and the admin dashboard.
pub struct AccessGate {
    admin_id: String,
    admin_secret: String,
    mode: AccessMode,
    error_until: Option<Instant>,
}

impl AccessGate {
    /// Fresh gate in visitor mode.
    pub fn new(config: &Config) -> Self {
        Self {
            admin_id: config.admin_id.clone(),
            admin_secret: config.admin_secret.clone(),
            mode: AccessMode::Visitor,
            error_until: None,
        }
    }

    /// Gate seeded from the session store: admin iff a flag from a previous
    /// sign-in in this session is still present. This is the only read of
    /// that store.
    pub async fn resume(config: &Config, session: &SessionStore) -> Result<Self, AppError> {
        let mut gate = Self::new(config);
        if session.is_admin_session().await? {
            gate.mode = AccessMode::Admin;
        }
        Ok(gate)
    }

    /// Attempt a sign-in. Both fields must match the configured pair.
    ///
    /// On success the session flag is set so the admin surface survives a
    /// reload. On failure the only state change is the transient error
    /// indicator, which clears itself after [`LOGIN_ERROR_FLASH`].
    pub async fn login(
        &mut self,
        id: &str,
        secret: &str,
        session: &SessionStore,
    ) -> Result<bool, AppError> {
        let id_ok = constant_time_compare(id, &self.admin_id);
        let secret_ok = constant_time_compare(secret, &self.admin_secret);

        if id_ok && secret_ok {
            self.mode = AccessMode::Admin;
            self.error_until = None;
            session.mark_admin().await?;
            tracing::info!("manager signed in");
            Ok(true)
        } else {
            self.error_until = Some(Instant::now() + LOGIN_ERROR_FLASH);
            Ok(false)
        }
    }

    /// Sign out: clear the session flag and return to visitor mode.
    pub async fn logout(&mut self, session: &SessionStore) -> Result<(), AppError> {
        session.clear_admin().await?;
        self.mode = AccessMode::Visitor;
        tracing::info!("manager signed out");
        Ok(())
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn is_admin(&self) -> bool {
        self.mode == AccessMode::Admin
    }

    /// True while the failed-sign-in indicator should still be shown.
    pub fn login_error_active(&self) -> bool {
        self.error_until
            .is_some_and(|until| Instant::now() < until)
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}
