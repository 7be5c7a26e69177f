use crate::config::QuizConfig;
use crate::data::{QuestionSource, parse_envelope};
use crate::error::LoadError;
use crate::model::Question;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;

/// Fuente principal: el JSON publicado en la web.
pub struct RemoteSource {
    endpoint: String,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.endpoint.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QuestionSource for RemoteSource {
    fn name(&self) -> &str {
        "remota"
    }

    fn fetch(&self) -> Result<Vec<Question>, LoadError> {
        let client = Client::builder().timeout(self.timeout).build()?;
        debug!("GET {}", self.endpoint);

        let response = client
            .get(&self.endpoint)
            .header(
                USER_AGENT,
                concat!("SentenceQuiz/", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text()?;
        parse_envelope(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_endpoint_is_a_network_error() {
        // La URL no se puede parsear: reqwest falla antes de abrir conexión
        let source = RemoteSource::new("http://[::1", Duration::from_secs(2));
        let err = source.fetch().expect_err("URL inválida");
        assert!(matches!(err, LoadError::Network(_)));
        assert!(err.is_network());
    }

    #[test]
    fn from_config_uses_configured_endpoint() {
        let config = QuizConfig {
            endpoint: "http://localhost:8080/data.json".into(),
            ..QuizConfig::default()
        };
        assert_eq!(
            RemoteSource::from_config(&config).endpoint(),
            "http://localhost:8080/data.json"
        );
    }
}
