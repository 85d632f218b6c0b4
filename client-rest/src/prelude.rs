//! Re-export of used objects

pub use super::client::{ClientError, RestClient};
pub use super::monitor::{time_ago, FlightMonitor, FlightUpdate, REFRESH_INTERVAL};
pub use super::notify::{Notice, Notifier, Severity};
pub use super::service::Client;

pub use lib_flightpath as flightpath;
pub use lib_flightpath::progress::FlightProgress;
pub use lib_flightpath::snapshot::{FlightSnapshot, FlightStatus};
