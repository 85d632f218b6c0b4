//! test utilities. Provides log macros and canned provider records.

use crate::provider::fixtures::FixtureProvider;
use crate::provider::{RawAirport, RawFlight};
use lib_flightpath::snapshot::FlightStatus;

/// Writes a debug! message to the test logger
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "test", $($arg)+)
    };
}

/// Writes an info! message to the test logger
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "test", $($arg)+)
    };
}

/// A complete en-route flight record, AF66 Paris -> Los Angeles
pub fn mock_raw_flight() -> RawFlight {
    RawFlight {
        flight_iata: Some(String::from("AF66")),
        flight_icao: Some(String::from("AFR66")),
        airline_name: Some(String::from("Air France")),
        airline_iata: Some(String::from("AF")),
        status: Some(FlightStatus::EnRoute),
        lat: Some(45.2),
        lng: Some(-30.5),
        alt: Some(11000.0),
        speed: Some(880.0),
        dir: Some(285.0),
        dep_iata: Some(String::from("CDG")),
        arr_iata: Some(String::from("LAX")),
        dep_time: Some(String::from("2024-05-01 10:30")),
        dep_time_utc: Some(String::from("2024-05-01 08:30")),
        arr_time: Some(String::from("2024-05-01 13:05")),
        arr_time_utc: Some(String::from("2024-05-01 20:05")),
        dep_actual: Some(String::from("2024-05-01 10:42")),
        arr_actual: None,
        aircraft_icao: Some(String::from("B77W")),
        reg_number: Some(String::from("F-GSQA")),
        dep_terminal: Some(String::from("2E")),
        dep_gate: Some(String::from("K41")),
        arr_terminal: Some(String::from("B")),
        arr_gate: None,
        arr_baggage: None,
        duration: Some(695),
        delayed: Some(12),
        eta: Some(380),
    }
}

/// An airport record with the given IATA code and coordinates
pub fn mock_raw_airport(iata: &str, lat: f64, lng: f64) -> RawAirport {
    RawAirport {
        iata_code: Some(String::from(iata)),
        name: Some(format!("{} International", iata)),
        city: Some(String::from(iata)),
        lat: Some(lat),
        lng: Some(lng),
    }
}

/// A fixture provider seeded with the AF66 route and both its airports
pub fn fixture_provider() -> FixtureProvider {
    let mut provider = FixtureProvider::default();
    provider.insert_flight(mock_raw_flight());
    provider.insert_airport(mock_raw_airport("CDG", 49.0097, 2.5479));
    provider.insert_airport(mock_raw_airport("LAX", 33.9416, -118.4085));

    ut_debug!("(fixture_provider) seeded fixture provider.");
    provider
}
