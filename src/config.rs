use thiserror::Error;

pub const DEFAULT_GITHUB_USER: &str = "Haritha0705";
pub const DEFAULT_FEED_URL: &str = "https://github-contributions-api.jogruber.de/v4";
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
    #[error("email relay needs {missing} alongside the other EMAILJS_* settings")]
    PartialRelay { missing: &'static str },
}

/// Email relay credentials. All three ids are public-facing but stay server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

/// Site settings that are not part of the Leptos options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub github_user: String,
    pub feed_base: String,
    /// `None` leaves the contact form up but makes sending fail politely.
    pub relay: Option<RelayConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_user: DEFAULT_GITHUB_USER.to_string(),
            feed_base: DEFAULT_FEED_URL.to_string(),
            relay: None,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(key)),
                Some(v) => Ok(Some(v.trim().to_string())),
                None => Ok(None),
            }
        };

        let github_user = var("PORTFOLIO_GITHUB_USER")?.unwrap_or(DEFAULT_GITHUB_USER.to_string());
        let feed_base = var("PORTFOLIO_FEED_URL")?
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(DEFAULT_FEED_URL.to_string());

        let relay = match (
            var("EMAILJS_SERVICE_ID")?,
            var("EMAILJS_TEMPLATE_ID")?,
            var("EMAILJS_PUBLIC_KEY")?,
        ) {
            (None, None, None) => None,
            (Some(service_id), Some(template_id), Some(public_key)) => Some(RelayConfig {
                service_id,
                template_id,
                public_key,
                endpoint: var("EMAILJS_ENDPOINT")?
                    .unwrap_or(DEFAULT_RELAY_ENDPOINT.to_string()),
            }),
            (None, _, _) => {
                return Err(ConfigError::PartialRelay {
                    missing: "EMAILJS_SERVICE_ID",
                })
            }
            (_, None, _) => {
                return Err(ConfigError::PartialRelay {
                    missing: "EMAILJS_TEMPLATE_ID",
                })
            }
            (_, _, None) => {
                return Err(ConfigError::PartialRelay {
                    missing: "EMAILJS_PUBLIC_KEY",
                })
            }
        };

        Ok(Self {
            github_user,
            feed_base,
            relay,
        })
    }

    /// Feed URL covering the last year of the configured profile.
    pub fn feed_url(&self) -> String {
        format!("{}/{}?y=last", self.feed_base, self.github_user)
    }
}
