use crate::{app_lib::AppConfig, features::auth::types::Credentials};
use anyhow::{Result, anyhow};
use secrecy::SecretString;

/// Settings shared by every action: where the API lives and who to log in as.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: AppConfig,
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            email: None,
            password: None,
        }
    }

    pub fn set_credentials(&mut self, email: String, password: SecretString) {
        self.email = Some(email);
        self.password = Some(password);
    }

    /// Credentials when both email and password were given.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some(Credentials {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    /// # Errors
    /// Returns an error naming the missing argument.
    pub fn require_credentials(&self) -> Result<Credentials> {
        if self.email.is_none() {
            return Err(anyhow!("missing required argument: --email"));
        }
        self.credentials()
            .ok_or_else(|| anyhow!("missing required argument: --password"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(AppConfig::new("https://api.projectdesk.dev"));
        assert_eq!(args.config.api_base_url, "https://api.projectdesk.dev");
        assert!(args.credentials().is_none());
    }

    #[test]
    fn test_require_credentials_names_missing_argument() {
        let mut args = GlobalArgs::new(AppConfig::new("https://api.projectdesk.dev"));
        let err = args.require_credentials().unwrap_err();
        assert!(err.to_string().contains("--email"));

        args.email = Some("a@b.com".to_string());
        let err = args.require_credentials().unwrap_err();
        assert!(err.to_string().contains("--password"));

        args.set_credentials("a@b.com".to_string(), SecretString::from("x"));
        let credentials = args.require_credentials().unwrap();
        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password.expose_secret(), "x");
    }
}
