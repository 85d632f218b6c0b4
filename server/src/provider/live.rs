//! Live upstream provider implementation over the AirLabs REST API

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{classify_flight_code, FlightDataProvider, ProviderError, RawAirport, RawFlight};

/// AirLabs wraps every payload in a `response` envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: Option<T>,
}

/// Provider backed by the live upstream API
#[derive(Debug, Clone)]
pub struct LiveProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LiveProvider {
    /// Create a new provider from service configuration
    pub fn new(config: &crate::config::Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .unwrap_or_default();

        LiveProvider {
            http,
            base_url: config.airlabs_base_url.clone(),
            api_key: config.airlabs_api_key.clone(),
        }
    }

    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        param: &str,
        value: &str,
    ) -> Result<Option<T>, ProviderError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), (param, value)])
            .send()
            .await
            .map_err(|e| {
                provider_error!("(get_envelope) could not reach [{}]: {}.", url, e);
                ProviderError::Unreachable
            })?;

        let status = response.status();
        if !status.is_success() {
            provider_warn!("(get_envelope) upstream answered [{}] for [{}].", status, url);
            return Err(ProviderError::Upstream(status.as_u16()));
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            provider_error!("(get_envelope) could not decode body from [{}]: {}.", url, e);
            ProviderError::InvalidBody
        })?;

        Ok(envelope.response)
    }

    async fn fetch_flight_by_param(
        &self,
        param: &str,
        value: &str,
    ) -> Result<Option<RawFlight>, ProviderError> {
        provider_debug!("(fetch_flight_by_param) {}={}.", param, value);
        self.get_envelope("flight", param, value).await
    }
}

#[async_trait]
impl FlightDataProvider for LiveProvider {
    async fn fetch_flight(&self, code: &str) -> Result<Option<RawFlight>, ProviderError> {
        for (param, value) in classify_flight_code(code) {
            if let Some(flight) = self.fetch_flight_by_param(param.as_str(), &value).await? {
                return Ok(Some(flight));
            }
        }
        Ok(None)
    }

    async fn fetch_airport(&self, iata: &str) -> Result<Option<RawAirport>, ProviderError> {
        if iata.is_empty() {
            return Ok(None);
        }

        provider_debug!("(fetch_airport) iata_code={}.", iata);
        let airports: Option<Vec<RawAirport>> =
            self.get_envelope("airports", "iata_code", iata).await?;

        Ok(airports.and_then(|mut list| {
            if list.is_empty() {
                None
            } else {
                Some(list.remove(0))
            }
        }))
    }
}
