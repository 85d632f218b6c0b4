//! Client Library: Client Functions, Structs, Traits

use lib_flightpath::snapshot::FlightSnapshot;
use serde::Deserialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Error type for client requests
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The service answered with a non-2xx status and the given detail
    Status {
        /// HTTP status code
        status: u16,
        /// `detail` string from the error body
        detail: String,
    },
    /// The service could not be reached
    Request(String),
    /// The service answered with an undecodable body
    InvalidBody(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ClientError::Status { detail, .. } => write!(f, "{}", detail),
            ClientError::Request(e) => write!(f, "Could not reach flight tracker service: {}", e),
            ClientError::InvalidBody(e) => {
                write!(f, "Invalid response from flight tracker service: {}", e)
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Error body returned by the service on non-2xx responses
#[derive(Debug, Deserialize)]
struct Detail {
    detail: String,
}

/// REST client implementation of the flight tracker service contract
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    name: String,
    http: reqwest::Client,
}

impl RestClient {
    /// Create a new client for a service at the given host and port
    pub fn new(host: &str, port: u16, name: &str) -> Self {
        RestClient {
            base_url: format!("http://{}:{}", host, port),
            name: String::from(name),
            http: reqwest::Client::new(),
        }
    }

    /// The configured name of this client
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The base address this client connects to
    pub fn get_address(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl crate::service::Client for RestClient {
    async fn get_flight(&self, code: &str) -> Result<FlightSnapshot, ClientError> {
        client_info!("(get_flight) {} client.", self.get_name());
        client_debug!("(get_flight) code: {}", code);

        let url = format!("{}/api/flight/{}", self.base_url, code);
        let response = self.http.get(&url).send().await.map_err(|e| {
            client_error!("(get_flight) request to [{}] failed: {}.", url, e);
            ClientError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<Detail>()
                .await
                .map(|d| d.detail)
                .unwrap_or_else(|_| format!("Error {}", status.as_u16()));
            client_warn!("(get_flight) [{}] answered {}: {}.", url, status, detail);
            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response.json().await.map_err(|e| {
            client_error!("(get_flight) could not decode body from [{}]: {}.", url, e);
            ClientError::InvalidBody(e.to_string())
        })
    }

    async fn is_ready(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                client_warn!("(is_ready) [{}] not reachable: {}.", url, e);
                false
            }
        }
    }
}
