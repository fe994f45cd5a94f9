//! Reduces auth responses to a [`User`].
//!
//! Login responses come in several shapes depending on the backend build, so
//! they are matched against an ordered list of strategies and, failing all of
//! them, a minimal user is synthesized from the submitted email. Any non-error
//! login response therefore authenticates the session.

use crate::{app_lib::AppError, features::auth::types::User};
use serde_json::Value;
use tracing::debug;

pub const FALLBACK_ID: i64 = 1;
pub const FALLBACK_NAME: &str = "User";

type Strategy = fn(&Value) -> Option<&Value>;

/// Tried in order; the first match wins.
const LOGIN_STRATEGIES: &[(&str, Strategy)] =
    &[("user field", wrapped_user), ("user-shaped body", bare_user)];

/// Extracts the session user from a successful login response.
#[must_use]
pub fn user_from_login(body: &Value, email: &str) -> User {
    for (name, strategy) in LOGIN_STRATEGIES {
        if let Some(candidate) = strategy(body) {
            debug!(strategy = *name, "login response matched");
            return user_from_candidate(candidate, email);
        }
    }

    debug!("login response carried no user, synthesizing session");
    User {
        id: FALLBACK_ID,
        name: FALLBACK_NAME.to_string(),
        email: email.to_string(),
    }
}

/// Extracts the session user from a "who am I" response.
///
/// Returns `Ok(None)` when the body carries no `user`.
///
/// # Errors
/// Returns `AppError::Parse` if `user` is present but is not a valid user record.
pub fn user_from_session(body: &Value) -> Result<Option<User>, AppError> {
    match body.get("user") {
        None | Some(Value::Null) => Ok(None),
        Some(user) => serde_json::from_value(user.clone())
            .map(Some)
            .map_err(|err| AppError::Parse(format!("Failed to decode session user: {err}"))),
    }
}

fn wrapped_user(body: &Value) -> Option<&Value> {
    body.get("user").filter(|user| is_present(user))
}

fn bare_user(body: &Value) -> Option<&Value> {
    body.get("id")
        .filter(|id| matches!(id, Value::Number(_) | Value::String(_)) && is_present(id))
        .map(|_| body)
}

/// Null, false, zero and the empty string count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// a candidate that is not an object keeps every fallback
fn user_from_candidate(candidate: &Value, email: &str) -> User {
    let field = |key: &str| candidate.as_object().and_then(|object| object.get(key));

    User {
        id: field("id").and_then(parse_id).unwrap_or(FALLBACK_ID),
        name: field("name")
            .and_then(text_field)
            .or_else(|| field("username").and_then(text_field))
            .unwrap_or(FALLBACK_NAME)
            .to_string(),
        email: field("email").and_then(text_field).unwrap_or(email).to_string(),
    }
}

// ids of 0 are treated as missing
fn parse_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    id.filter(|id| *id != 0)
}

fn text_field(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}
