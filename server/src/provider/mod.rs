//! Upstream flight-data provider
//! provides live and fixture-backed lookups of flight and airport records

#[macro_use]
pub mod macros;
pub mod fixtures;
pub mod live;

use async_trait::async_trait;
use lazy_static::lazy_static;
use lib_flightpath::snapshot::{AirportInfo, FlightSnapshot, FlightStatus};
use regex::Regex;
use serde::Deserialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tokio::sync::OnceCell;

use fixtures::FixtureProvider;
use live::LiveProvider;

lazy_static! {
    // ICAO: 3-letter airline code + 1-4 digit flight number (e.g. UAL123, BAW117)
    static ref ICAO_RE: Regex = Regex::new(r"^[A-Z]{3}\d{1,4}[A-Z]?$").expect("valid regex");
    // IATA: 2-letter airline code + 1-4 digit flight number (e.g. UA123, AA1)
    static ref IATA_RE: Regex = Regex::new(r"^[A-Z\d]{2}\d{1,4}[A-Z]?$").expect("valid regex");
}

pub(crate) static PROVIDER: OnceCell<Box<dyn FlightDataProvider>> = OnceCell::const_new();

/// Returns the process-wide flight data provider, initializing it from
/// environment configuration on first use. Serves fixture records when
/// `USE_FIXTURES` is set, the live upstream API otherwise.
pub async fn get_provider() -> &'static dyn FlightDataProvider {
    PROVIDER
        .get_or_init(|| async move {
            let config = crate::Config::try_from_env().unwrap_or_default();
            if config.use_fixtures {
                provider_info!("(get_provider) using fixture provider.");
                Box::new(FixtureProvider::from_dir(&config.fixtures_dir))
                    as Box<dyn FlightDataProvider>
            } else {
                provider_info!("(get_provider) using live provider.");
                Box::new(LiveProvider::new(&config))
            }
        })
        .await
        .as_ref()
}

/// Error type for provider lookups
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProviderError {
    /// The upstream API answered with a non-2xx status
    Upstream(u16),
    /// The upstream API could not be reached
    Unreachable,
    /// The upstream API answered with an undecodable body
    InvalidBody,
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ProviderError::Upstream(status) => write!(f, "Upstream API error: {}", status),
            ProviderError::Unreachable => write!(f, "Could not reach flight data provider"),
            ProviderError::InvalidBody => {
                write!(f, "Invalid response from flight data provider")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Raw flight record as returned by the upstream feed. Every field is
/// independently nullable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlight {
    pub flight_iata: Option<String>,
    pub flight_icao: Option<String>,
    pub airline_name: Option<String>,
    pub airline_iata: Option<String>,
    pub status: Option<FlightStatus>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub alt: Option<f64>,
    pub speed: Option<f64>,
    pub dir: Option<f64>,
    pub dep_iata: Option<String>,
    pub arr_iata: Option<String>,
    pub dep_time: Option<String>,
    pub dep_time_utc: Option<String>,
    pub arr_time: Option<String>,
    pub arr_time_utc: Option<String>,
    pub dep_actual: Option<String>,
    pub arr_actual: Option<String>,
    pub aircraft_icao: Option<String>,
    pub reg_number: Option<String>,
    pub dep_terminal: Option<String>,
    pub dep_gate: Option<String>,
    pub arr_terminal: Option<String>,
    pub arr_gate: Option<String>,
    pub arr_baggage: Option<String>,
    pub duration: Option<i64>,
    pub delayed: Option<i64>,
    pub eta: Option<i64>,
}

/// Raw airport record as returned by the upstream feed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAirport {
    pub iata_code: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Lookup interface to the upstream feed, implemented by [`LiveProvider`]
/// and [`FixtureProvider`]. A missing record is `Ok(None)`, not an error.
#[async_trait]
pub trait FlightDataProvider: Send + Sync {
    /// Look up a flight by its IATA or ICAO flight code
    async fn fetch_flight(&self, code: &str) -> Result<Option<RawFlight>, ProviderError>;

    /// Look up an airport by its IATA code. An empty code returns `Ok(None)`.
    async fn fetch_airport(&self, iata: &str) -> Result<Option<RawAirport>, ProviderError>;
}

/// Query parameter a flight code maps to on the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightCodeParam {
    /// `flight_icao`
    Icao,
    /// `flight_iata`
    Iata,
}

impl FlightCodeParam {
    /// The upstream query parameter name
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightCodeParam::Icao => "flight_icao",
            FlightCodeParam::Iata => "flight_iata",
        }
    }
}

/// Return a prioritized list of (param, value) lookups to try against the
/// upstream API for a user-supplied flight code. ICAO-shaped codes are tried
/// as ICAO first; codes matching neither form are tried as both anyway.
pub fn classify_flight_code(code: &str) -> Vec<(FlightCodeParam, String)> {
    let code = code.trim().to_uppercase();
    let mut attempts = vec![];

    if ICAO_RE.is_match(&code) {
        attempts.push((FlightCodeParam::Icao, code.clone()));
    }
    if IATA_RE.is_match(&code) {
        attempts.push((FlightCodeParam::Iata, code.clone()));
    }

    if attempts.is_empty() {
        attempts.push((FlightCodeParam::Icao, code.clone()));
        attempts.push((FlightCodeParam::Iata, code));
    }

    attempts
}

/// Fetch a flight record and enrich it with its departure and arrival
/// airport records, fetched concurrently by IATA code. Either airport may be
/// absent without failing the lookup.
pub async fn get_flight_with_airports(
    code: &str,
    provider: &dyn FlightDataProvider,
) -> Result<Option<FlightSnapshot>, ProviderError> {
    let Some(flight) = provider.fetch_flight(code).await? else {
        provider_debug!("(get_flight_with_airports) no record for [{}].", code);
        return Ok(None);
    };

    let dep_iata = flight.dep_iata.clone().unwrap_or_default();
    let arr_iata = flight.arr_iata.clone().unwrap_or_default();

    let (dep_info, arr_info) = tokio::join!(
        provider.fetch_airport(&dep_iata),
        provider.fetch_airport(&arr_iata)
    );

    Ok(Some(snapshot_from_raw(flight, dep_info?, arr_info?)))
}

/// Normalize raw upstream records into the snapshot served by the REST API
fn snapshot_from_raw(
    flight: RawFlight,
    dep_info: Option<RawAirport>,
    arr_info: Option<RawAirport>,
) -> FlightSnapshot {
    FlightSnapshot {
        flight_iata: flight.flight_iata,
        flight_icao: flight.flight_icao,
        airline_name: flight.airline_name,
        airline_iata: flight.airline_iata,
        status: flight.status,
        lat: flight.lat,
        lng: flight.lng,
        alt: flight.alt,
        speed: flight.speed,
        dir: flight.dir,
        dep_time: flight.dep_time,
        dep_time_utc: flight.dep_time_utc,
        arr_time: flight.arr_time,
        arr_time_utc: flight.arr_time_utc,
        dep_actual: flight.dep_actual,
        arr_actual: flight.arr_actual,
        aircraft_icao: flight.aircraft_icao,
        reg_number: flight.reg_number,
        dep_terminal: flight.dep_terminal,
        dep_gate: flight.dep_gate,
        arr_terminal: flight.arr_terminal,
        arr_gate: flight.arr_gate,
        arr_baggage: flight.arr_baggage,
        duration: flight.duration,
        delayed: flight.delayed,
        eta: flight.eta,
        dep_airport: dep_info.map(airport_from_raw),
        arr_airport: arr_info.map(airport_from_raw),
    }
}

fn airport_from_raw(raw: RawAirport) -> AirportInfo {
    AirportInfo {
        iata: raw.iata_code,
        name: raw.name,
        city: raw.city,
        lat: raw.lat,
        lng: raw.lng,
    }
}
