//! Auth session state for the client. [`AuthContext`] owns the only copy of
//! the session record and is handed to whatever needs it; clones share the
//! same state and the same HTTP client. Only non-sensitive user metadata is
//! kept in memory; the session itself lives in the cookie jar.
//!
//! Overlapping calls are not ordered against each other: a slow login that
//! completes after a logout will still commit its user. `is_loading` stays up
//! until the last of them finishes.

use crate::{
    app_lib::{ApiClient, AppError},
    features::auth::{
        client, session,
        types::{Credentials, NewUser, User},
    },
};
use serde_json::Value;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Snapshot of the session as observed by readers.
///
/// `is_authenticated` is true exactly when `user` is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

/// Shared handle over the session state and the API client.
#[derive(Clone, Debug)]
pub struct AuthContext {
    api: ApiClient,
    state: Arc<watch::Sender<AuthState>>,
    in_flight: Arc<AtomicUsize>,
}

impl AuthContext {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            api,
            state: Arc::new(state),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub(crate) fn set_user(&self, user: User) {
        self.state.send_modify(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
        });
    }

    pub(crate) fn clear_user(&self) {
        self.state.send_modify(|state| {
            state.user = None;
            state.is_authenticated = false;
        });
    }

    fn begin_loading(&self) -> LoadingGuard<'_> {
        LoadingGuard::new(&self.state, &self.in_flight)
    }

    /// Logs in and commits the resulting user as the current session.
    ///
    /// Any successful response authenticates the session; see
    /// [`session::user_from_login`] for how the user is derived.
    ///
    /// # Errors
    /// Returns the request failure after clearing the session.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AppError> {
        let _loading = self.begin_loading();

        match client::login(&self.api, credentials).await {
            Ok(body) => {
                let user = session::user_from_login(&body, &credentials.email);
                self.set_user(user.clone());
                info!(user_id = user.id, "logged in");
                Ok(user)
            }
            Err(err) => {
                error!(error = %err, "login failed");
                self.clear_user();
                Err(err)
            }
        }
    }

    /// Registers an account. The session is left untouched.
    ///
    /// # Errors
    /// Returns the request failure.
    pub async fn register(&self, user: &NewUser) -> Result<Value, AppError> {
        let _loading = self.begin_loading();

        client::register(&self.api, user)
            .await
            .inspect_err(|err| error!(error = %err, "registration failed"))
    }

    /// Logs out. The session is cleared whether or not the server call succeeds.
    ///
    /// # Errors
    /// Returns the request failure, after the session has been cleared.
    pub async fn logout(&self) -> Result<(), AppError> {
        let _loading = self.begin_loading();

        let result = client::logout(&self.api).await;
        self.clear_user();

        match result {
            Ok(_) => {
                info!("logged out");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "logout failed");
                Err(err)
            }
        }
    }

    /// Rehydrates the session from the server.
    ///
    /// Commits and returns the user when the response carries one; clears the
    /// session and returns `None` when it does not.
    ///
    /// # Errors
    /// Returns the request or decode failure after clearing the session.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let _loading = self.begin_loading();

        let outcome = match client::auth(&self.api).await {
            Ok(body) => session::user_from_session(&body),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(Some(user)) => {
                self.set_user(user.clone());
                Ok(Some(user))
            }
            Ok(None) => {
                self.clear_user();
                Ok(None)
            }
            Err(err) => {
                error!(error = %err, "session check failed");
                self.clear_user();
                Err(err)
            }
        }
    }

    /// Startup check: any failure just means "not logged in".
    pub async fn init(&self) {
        if let Err(err) = self.current_user().await {
            debug!(error = %err, "no active session");
            self.clear_user();
        }
    }
}

/// Holds `is_loading` up for as long as any guard lives.
///
/// The counter only changes inside `send_if_modified`, so it moves together
/// with the flag under the channel's write lock.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<AuthState>,
    in_flight: &'a AtomicUsize,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a watch::Sender<AuthState>, in_flight: &'a AtomicUsize) -> Self {
        state.send_if_modified(|state| {
            in_flight.fetch_add(1, Ordering::Relaxed);
            !std::mem::replace(&mut state.is_loading, true)
        });
        Self { state, in_flight }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            if self.in_flight.fetch_sub(1, Ordering::Relaxed) == 1 {
                state.is_loading = false;
                true
            } else {
                false
            }
        });
    }
}
