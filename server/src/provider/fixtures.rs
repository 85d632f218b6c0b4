//! Fixture-backed provider implementation
//! serves canned flight and airport records from disk, no network

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use super::{FlightDataProvider, ProviderError, RawAirport, RawFlight};

/// Provider backed by `flight_*.json` / `airport_*.json` files indexed at
/// startup. Flights are keyed by both their IATA and ICAO codes, airports by
/// IATA code.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    flights: HashMap<String, RawFlight>,
    airports: HashMap<String, RawAirport>,
}

impl FixtureProvider {
    /// Build the fixture index from a directory. A missing or unreadable
    /// directory yields an empty index.
    pub fn from_dir(dir: &str) -> Self {
        let mut provider = FixtureProvider::default();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                provider_warn!(
                    "(from_dir) could not read fixtures directory [{}]: {}.",
                    dir,
                    e
                );
                return provider;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if name.starts_with("flight_") && name.ends_with(".json") {
                match read_json::<RawFlight>(&path) {
                    Ok(flight) => provider.insert_flight(flight),
                    Err(e) => provider_warn!("(from_dir) skipping [{}]: {}.", name, e),
                }
            } else if name.starts_with("airport_") && name.ends_with(".json") {
                match read_json::<RawAirport>(&path) {
                    Ok(airport) => provider.insert_airport(airport),
                    Err(e) => provider_warn!("(from_dir) skipping [{}]: {}.", name, e),
                }
            }
        }

        provider_info!(
            "(from_dir) indexed {} flight keys and {} airports from [{}].",
            provider.flights.len(),
            provider.airports.len(),
            dir
        );

        provider
    }

    /// Index a flight record under its IATA and ICAO codes
    pub fn insert_flight(&mut self, flight: RawFlight) {
        if let Some(iata) = &flight.flight_iata {
            self.flights.insert(iata.to_uppercase(), flight.clone());
        }
        if let Some(icao) = &flight.flight_icao {
            self.flights.insert(icao.to_uppercase(), flight.clone());
        }
    }

    /// Index an airport record under its IATA code
    pub fn insert_airport(&mut self, airport: RawAirport) {
        if let Some(code) = &airport.iata_code {
            self.airports.insert(code.to_uppercase(), airport.clone());
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

#[async_trait]
impl FlightDataProvider for FixtureProvider {
    async fn fetch_flight(&self, code: &str) -> Result<Option<RawFlight>, ProviderError> {
        Ok(self.flights.get(&code.trim().to_uppercase()).cloned())
    }

    async fn fetch_airport(&self, iata: &str) -> Result<Option<RawAirport>, ProviderError> {
        if iata.is_empty() {
            return Ok(None);
        }
        Ok(self.airports.get(&iata.to_uppercase()).cloned())
    }
}
