use thiserror::Error;
use url::Url;

/// Environment variable overriding the generation endpoint.
pub const ENDPOINT_ENV: &str = "MAILPILOT_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/email/generate";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{variable} is not a valid http(s) URL ({value:?}): {reason}")]
    InvalidEndpoint {
        variable: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub endpoint: Url,
}

impl GeneratorSettings {
    pub fn with_endpoint(raw: &str) -> Result<Self, SettingsError> {
        Ok(Self {
            endpoint: parse_endpoint(raw)?,
        })
    }

    /// Reads [`ENDPOINT_ENV`], using [`DEFAULT_ENDPOINT`] when unset.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        match lookup(ENDPOINT_ENV) {
            Some(raw) if !raw.trim().is_empty() => Self::with_endpoint(raw.trim()),
            _ => Self::with_endpoint(DEFAULT_ENDPOINT),
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, SettingsError> {
    let invalid = |reason: String| SettingsError::InvalidEndpoint {
        variable: ENDPOINT_ENV,
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_variable_uses_default() {
        let settings = GeneratorSettings::from_lookup(|_| None).unwrap();
        assert_eq!(settings.endpoint.as_str(), DEFAULT_ENDPOINT);

        let settings = GeneratorSettings::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(
            settings,
            GeneratorSettings::with_endpoint(DEFAULT_ENDPOINT).unwrap()
        );
    }

    #[test]
    fn default_endpoint_is_accepted() {
        let settings = GeneratorSettings::with_endpoint(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(settings.endpoint.scheme(), "http");
        assert_eq!(settings.endpoint.path(), "/api/email/generate");
    }

    #[test]
    fn variable_overrides_endpoint() {
        let settings = GeneratorSettings::from_lookup(|key| {
            (key == ENDPOINT_ENV).then(|| " https://mail.example.com/generate ".to_string())
        })
        .unwrap();
        assert_eq!(settings.endpoint.as_str(), "https://mail.example.com/generate");
    }

    #[test]
    fn non_http_endpoints_are_rejected() {
        let err = GeneratorSettings::with_endpoint("ftp://example.com/x").unwrap_err();
        assert!(err.to_string().contains(ENDPOINT_ENV));

        assert!(GeneratorSettings::with_endpoint("localhost:8080").is_err());
        assert!(GeneratorSettings::with_endpoint("not a url").is_err());
    }
}
