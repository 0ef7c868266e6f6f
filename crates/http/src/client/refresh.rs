//! Serialized token renewal
//!
//! At most one renewal call is in flight at a time. The first request to
//! hit a 401 performs the renewal; requests that hit 401 while it is
//! pending park on a queue and resume with the outcome. The queue is
//! drained after every attempt, success or failure.

use crate::error::ClientError;
use crate::types::{TokenRefreshRequest, TokenRefreshResponse};
use certportal_core::credentials::CredentialStore;
use reqwest::Client;
use tokio::sync::{Mutex, oneshot};
use tracing::{info, warn};

/// Path of the renewal endpoint
pub const REFRESH_PATH: &str = "/api/token/refresh/";

enum Role {
    Leader,
    Waiter(oneshot::Receiver<Option<String>>),
}

#[derive(Default)]
struct GateState {
    refreshing: bool,
    pending: Vec<oneshot::Sender<Option<String>>>,
}

#[derive(Default)]
pub(crate) struct RefreshGate {
    state: Mutex<GateState>,
}

impl RefreshGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Renew the access token, or wait for the renewal already in flight
    ///
    /// Returns the fresh access token, or `None` when the renewal failed,
    /// in which case both stored tokens have been cleared.
    pub(crate) async fn renew(
        &self,
        http: &Client,
        base_url: &str,
        store: &dyn CredentialStore,
    ) -> Option<String> {
        let role = {
            let mut state = self.state.lock().await;
            if state.refreshing {
                let (tx, rx) = oneshot::channel();
                state.pending.push(tx);
                Role::Waiter(rx)
            } else {
                state.refreshing = true;
                Role::Leader
            }
        };

        if let Role::Waiter(rx) = role {
            return rx.await.unwrap_or(None);
        }

        let outcome = match self.attempt(http, base_url, store).await {
            Ok(access) => {
                info!("access token renewed");
                Some(access)
            }
            Err(err) => {
                warn!(error = %err, "token renewal failed, clearing stored credentials");
                if let Err(err) = store.clear() {
                    warn!(error = %err, "failed to clear credential store");
                }
                None
            }
        };

        let waiters = {
            let mut state = self.state.lock().await;
            state.refreshing = false;
            std::mem::take(&mut state.pending)
        };
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }

        outcome
    }

    async fn attempt(
        &self,
        http: &Client,
        base_url: &str,
        store: &dyn CredentialStore,
    ) -> Result<String, ClientError> {
        let refresh = store
            .refresh_token()?
            .ok_or_else(|| ClientError::Configuration("no refresh token stored".into()))?;

        // Plain send rather than the intercepted path: a failing renewal
        // must not trigger another renewal.
        let response = http
            .post(format!("{base_url}{REFRESH_PATH}"))
            .json(&TokenRefreshRequest { refresh })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }

        let body: TokenRefreshResponse = response.json().await?;
        store.store_access(&body.access)?;
        Ok(body.access)
    }
}
