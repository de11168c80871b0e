//! Runtime settings read from environment variables.
//!
//! Both credential pairs are validated up front so a missing variable is
//! reported before the first network request.

use std::fmt;

use crate::error::{RosterError, Result};

const DEFAULT_API_URL: &str = "https://api.clever.com/v2.1/";
const DEFAULT_OAUTH_URL: &str = "https://clever.com/oauth/tokens";
const SMTP_HOST: &str = "smtp.gmail.com";
const SMTP_PORT: u16 = 587;

const MISSING_CREDENTIALS: &str = "all environment variables must be set including \
     ${MAP_CLEVER_ID} ${MAP_CLEVER_SECRET} ${CLEVER_ID} and ${CLEVER_SECRET}";

/// The Clever application whose credentials are used for a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    /// MAP Accelerator app (`CLEVER_ID` / `CLEVER_SECRET`).
    Accelerator,
    /// MAP Growth app (`MAP_CLEVER_ID` / `MAP_CLEVER_SECRET`).
    Growth,
}

impl App {
    /// Environment variable names for this app's client id and secret.
    pub fn env_keys(self) -> (&'static str, &'static str) {
        match self {
            App::Accelerator => ("CLEVER_ID", "CLEVER_SECRET"),
            App::Growth => ("MAP_CLEVER_ID", "MAP_CLEVER_SECRET"),
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            App::Accelerator => f.write_str("accelerator"),
            App::Growth => f.write_str("growth"),
        }
    }
}

/// OAuth client credentials for one Clever app.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    fn from_lookup<F>(app: App, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (id_key, secret_key) = app.env_keys();
        match (non_empty(lookup, id_key), non_empty(lookup, secret_key)) {
            (Some(client_id), Some(client_secret)) => Ok(Self {
                client_id,
                client_secret,
            }),
            _ => Err(RosterError::ConfigMissing(MISSING_CREDENTIALS.to_string())),
        }
    }
}

/// SMTP settings for delivering the report.
#[derive(Clone)]
pub struct MailSettings {
    pub from: String,
    pub to: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

/// Everything a diff run needs from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub oauth_url: String,
    pub accelerator: Credentials,
    pub growth: Credentials,
    /// `None` when any of `FROM_EMAIL`, `TO_EMAIL`, `GMAIL_PASSWORD` is unset.
    pub mail: Option<MailSettings>,
}

impl Settings {
    /// Load settings through a key lookup, usually `std::env::var`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ConfigMissing`] if either credential pair is
    /// incomplete.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let accelerator = Credentials::from_lookup(App::Accelerator, &lookup)?;
        let growth = Credentials::from_lookup(App::Growth, &lookup)?;

        let mail = match (
            non_empty(&lookup, "FROM_EMAIL"),
            non_empty(&lookup, "TO_EMAIL"),
            non_empty(&lookup, "GMAIL_PASSWORD"),
        ) {
            (Some(from), Some(to), Some(password)) => Some(MailSettings {
                from,
                to,
                password,
                host: SMTP_HOST.to_string(),
                port: SMTP_PORT,
            }),
            _ => None,
        };

        Ok(Self {
            api_url: non_empty(&lookup, "CLEVER_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            oauth_url: non_empty(&lookup, "CLEVER_OAUTH_URL")
                .unwrap_or_else(|| DEFAULT_OAUTH_URL.to_string()),
            accelerator,
            growth,
            mail,
        })
    }

    /// Credentials for the given app.
    pub fn credentials(&self, app: App) -> &Credentials {
        match app {
            App::Accelerator => &self.accelerator,
            App::Growth => &self.growth,
        }
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const ALL_CREDENTIALS: &[(&str, &str)] = &[
        ("CLEVER_ID", "acc-id"),
        ("CLEVER_SECRET", "acc-secret"),
        ("MAP_CLEVER_ID", "map-id"),
        ("MAP_CLEVER_SECRET", "map-secret"),
    ];

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_lookup(lookup_from(ALL_CREDENTIALS)).unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.oauth_url, DEFAULT_OAUTH_URL);
        assert_eq!(settings.credentials(App::Accelerator).client_id, "acc-id");
        assert_eq!(settings.credentials(App::Growth).client_secret, "map-secret");
        assert!(settings.mail.is_none());
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("CLEVER_ID", "acc-id"),
            ("CLEVER_SECRET", "acc-secret"),
            ("MAP_CLEVER_ID", "map-id"),
        ]));
        let err = settings.unwrap_err();
        assert!(matches!(err, RosterError::ConfigMissing(_)));
        assert!(err.to_string().contains("${MAP_CLEVER_SECRET}"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut pairs = ALL_CREDENTIALS.to_vec();
        pairs[0] = ("CLEVER_ID", "");
        let result = Settings::from_lookup(lookup_from(&pairs));
        assert!(matches!(result, Err(RosterError::ConfigMissing(_))));
    }

    #[test]
    fn test_mail_settings_when_complete() {
        let mut pairs = ALL_CREDENTIALS.to_vec();
        pairs.extend([
            ("FROM_EMAIL", "bot@example.com"),
            ("TO_EMAIL", "team@example.com"),
            ("GMAIL_PASSWORD", "app-password"),
        ]);
        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();
        let mail = settings.mail.unwrap();
        assert_eq!(mail.host, "smtp.gmail.com");
        assert_eq!(mail.port, 587);
        assert!(!format!("{mail:?}").contains("app-password"));
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let settings = Settings::from_lookup(lookup_from(ALL_CREDENTIALS)).unwrap();
        let debug = format!("{:?}", settings.accelerator);
        assert!(debug.contains("acc-id"));
        assert!(!debug.contains("acc-secret"));
    }
}
