#![doc = include_str!("../README.md")]

pub mod geo;
pub mod progress;
pub mod snapshot;

pub use geo::{build_path, build_path_default, closest_index, GeoPoint, GreatCirclePath};
pub use progress::{compute_progress, FlightProgress, RouteSplit};
pub use snapshot::{AirportInfo, FlightSnapshot, FlightStatus};
