//! Auth feature module: account endpoints, login response parsing and the
//! session state holder. It keeps authentication logic out of the CLI and
//! must stay aligned with backend response shapes. Password material is held
//! in `SecretString` and must never be logged.
//!
//! Flow Overview: register creates the account and leaves the session alone.
//! Login posts credentials, the server sets the session cookie, and the
//! response is reduced to a [`User`] that becomes the current session. The
//! "who am I" call rehydrates the session from the cookie; logout clears it
//! locally even when the server call fails.

pub mod client;
pub mod session;
pub mod state;
pub mod types;

pub use state::{AuthContext, AuthState};
pub use types::{Credentials, NewUser, User};
