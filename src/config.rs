//! Counter Backend Configuration
//!
//! Static table of counter backends, validated once at startup.

/// Which counting service the widget talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// AWS API Gateway + Lambda (custom domain)
    Aws,
    /// GCP Cloud Functions
    Gcp,
}

/// Backend the deployed site uses
pub const ACTIVE_BACKEND: Backend = Backend::Gcp;

const AWS_ENDPOINT: &str = "https://api.danphillipsonline.com/counter";
const GCP_ENDPOINT: &str = "https://api.danphillips.cloud/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint set but not an absolute http(s) URL
    InvalidEndpoint { backend: Backend, url: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidEndpoint { backend, url } => {
                write!(f, "invalid endpoint for {backend:?}: '{url}'")
            }
        }
    }
}

/// Validated counter configuration. An unset endpoint is legal and
/// puts the widget in placeholder mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    backend: Backend,
    endpoint: Option<String>,
}

impl CounterConfig {
    /// Look up and validate the endpoint for one backend
    pub fn for_backend(backend: Backend) -> Result<Self, ConfigError> {
        let url = match backend {
            Backend::Aws => AWS_ENDPOINT,
            Backend::Gcp => GCP_ENDPOINT,
        };
        Self::with_endpoint(backend, url)
    }

    fn with_endpoint(backend: Backend, url: &str) -> Result<Self, ConfigError> {
        if url.is_empty() {
            return Ok(Self {
                backend,
                endpoint: None,
            });
        }
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidEndpoint {
                backend,
                url: url.to_string(),
            });
        }
        Ok(Self {
            backend,
            endpoint: Some(url.to_string()),
        })
    }

    /// Config with no endpoint at all; the widget shows its
    /// placeholder and never touches the network.
    pub fn unconfigured(backend: Backend) -> Self {
        Self {
            backend,
            endpoint: None,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}
