//! Flight snapshot data model.
//!
//! One snapshot is one complete poll result for a flight, superseding any
//! prior poll in full. The upstream feed gives no completeness guarantee, so
//! every telemetry field is independently nullable.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a tracked flight, parsed from the upstream feed's
/// free-form status string. Anything unrecognized maps to [`Unknown`].
///
/// [`Unknown`]: FlightStatus::Unknown
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightStatus {
    /// Airborne, between departure and arrival
    EnRoute,
    /// Airborne, alternate upstream wording for en-route
    Active,
    /// Arrived at the destination
    Landed,
    /// Not yet departed
    Scheduled,
    /// Will not fly
    Cancelled,
    /// Upstream reported a status outside the known set
    #[serde(other)]
    Unknown,
}

impl FlightStatus {
    /// True when the aircraft is expected to be in the air
    pub fn is_airborne(&self) -> bool {
        matches!(self, FlightStatus::EnRoute | FlightStatus::Active)
    }
}

/// Best-effort airport record attached to a snapshot. Either endpoint of a
/// route may be missing entirely, and any field of a present record may be
/// null.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct AirportInfo {
    /// IATA airport code (e.g. "CDG")
    pub iata: Option<String>,

    /// Full airport name
    pub name: Option<String>,

    /// City served by the airport
    pub city: Option<String>,

    /// Airport latitude in degrees
    pub lat: Option<f64>,

    /// Airport longitude in degrees
    pub lng: Option<f64>,
}

/// One complete, immutable poll result for a single flight.
///
/// Created fresh on every poll; the previous snapshot is discarded wholesale,
/// never merged or patched. Missing fields are the expected steady state of
/// the upstream feed, not an error.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct FlightSnapshot {
    /// IATA flight number (e.g. "AF66")
    pub flight_iata: Option<String>,

    /// ICAO flight number (e.g. "AFR66")
    pub flight_icao: Option<String>,

    /// Operating airline name
    pub airline_name: Option<String>,

    /// Operating airline IATA code
    pub airline_iata: Option<String>,

    /// Parsed flight status
    pub status: Option<FlightStatus>,

    /// Live aircraft latitude in degrees
    pub lat: Option<f64>,

    /// Live aircraft longitude in degrees
    pub lng: Option<f64>,

    /// Live aircraft altitude in meters
    pub alt: Option<f64>,

    /// Live ground speed in km/h
    pub speed: Option<f64>,

    /// Compass heading in degrees, 0 = north
    pub dir: Option<f64>,

    /// Scheduled departure, local time
    pub dep_time: Option<String>,

    /// Scheduled departure, UTC
    pub dep_time_utc: Option<String>,

    /// Scheduled arrival, local time
    pub arr_time: Option<String>,

    /// Scheduled arrival, UTC
    pub arr_time_utc: Option<String>,

    /// Actual departure time, if departed
    pub dep_actual: Option<String>,

    /// Actual arrival time, if landed
    pub arr_actual: Option<String>,

    /// ICAO aircraft type designator (e.g. "B77W")
    pub aircraft_icao: Option<String>,

    /// Aircraft registration (tail number)
    pub reg_number: Option<String>,

    /// Departure terminal
    pub dep_terminal: Option<String>,

    /// Departure gate
    pub dep_gate: Option<String>,

    /// Arrival terminal
    pub arr_terminal: Option<String>,

    /// Arrival gate
    pub arr_gate: Option<String>,

    /// Arrival baggage claim
    pub arr_baggage: Option<String>,

    /// Scheduled flight duration in minutes
    pub duration: Option<i64>,

    /// Delay in minutes, if delayed
    pub delayed: Option<i64>,

    /// Estimated minutes until arrival
    pub eta: Option<i64>,

    /// Departure airport record
    pub dep_airport: Option<AirportInfo>,

    /// Arrival airport record
    pub arr_airport: Option<AirportInfo>,
}

impl FlightSnapshot {
    /// True when the snapshot's status reports the aircraft in the air.
    /// A missing status is treated as not airborne.
    pub fn is_airborne(&self) -> bool {
        self.status.map(|s| s.is_airborne()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        let cases = [
            (FlightStatus::EnRoute, "\"en-route\""),
            (FlightStatus::Active, "\"active\""),
            (FlightStatus::Landed, "\"landed\""),
            (FlightStatus::Scheduled, "\"scheduled\""),
            (FlightStatus::Cancelled, "\"cancelled\""),
        ];

        for (status, json) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), json);
            let parsed: FlightStatus = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_unrecognized_maps_to_unknown() {
        for junk in ["\"diverted\"", "\"taxiing\"", "\"\""] {
            let parsed: FlightStatus = serde_json::from_str(junk).unwrap();
            assert_eq!(parsed, FlightStatus::Unknown);
        }
    }

    #[test]
    fn test_is_airborne() {
        assert!(FlightStatus::EnRoute.is_airborne());
        assert!(FlightStatus::Active.is_airborne());
        assert!(!FlightStatus::Landed.is_airborne());
        assert!(!FlightStatus::Scheduled.is_airborne());
        assert!(!FlightStatus::Cancelled.is_airborne());
        assert!(!FlightStatus::Unknown.is_airborne());

        let snapshot = FlightSnapshot::default();
        assert!(!snapshot.is_airborne());
    }

    #[test]
    fn test_snapshot_all_null_deserializes() {
        let json = r#"{
            "flight_iata": null, "flight_icao": null, "airline_name": null,
            "airline_iata": null, "status": null, "lat": null, "lng": null,
            "alt": null, "speed": null, "dir": null, "dep_time": null,
            "dep_time_utc": null, "arr_time": null, "arr_time_utc": null,
            "dep_actual": null, "arr_actual": null, "aircraft_icao": null,
            "reg_number": null, "dep_terminal": null, "dep_gate": null,
            "arr_terminal": null, "arr_gate": null, "arr_baggage": null,
            "duration": null, "delayed": null, "eta": null,
            "dep_airport": null, "arr_airport": null
        }"#;

        let snapshot: FlightSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot, FlightSnapshot::default());
    }

    #[test]
    fn test_snapshot_partial_record_deserializes() {
        let json = r#"{
            "flight_iata": "AF66",
            "status": "en-route",
            "lat": 45.2,
            "arr_airport": { "iata": "LAX", "name": null, "city": null, "lat": 33.94, "lng": null }
        }"#;

        let snapshot: FlightSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.flight_iata.as_deref(), Some("AF66"));
        assert_eq!(snapshot.status, Some(FlightStatus::EnRoute));
        assert_eq!(snapshot.lat, Some(45.2));
        assert_eq!(snapshot.lng, None);

        let arr = snapshot.arr_airport.unwrap();
        assert_eq!(arr.iata.as_deref(), Some("LAX"));
        assert_eq!(arr.lat, Some(33.94));
        assert_eq!(arr.lng, None);
    }
}
