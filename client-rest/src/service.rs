//! Client Library: Client Functions, Structs, Traits

use lib_flightpath::snapshot::FlightSnapshot;

use crate::client::ClientError;

/// REST object traits to provide wrappers for REST functions
#[async_trait::async_trait]
pub trait Client {
    /// Returns the normalized [`FlightSnapshot`] for a flight code.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the service can not be reached, answers
    /// with a non-2xx status, or returns an undecodable body.
    ///
    /// # Examples
    /// ```no_run
    /// use svc_flight_tracker_client_rest::prelude::*;
    ///
    /// async fn example() -> Result<(), Box<dyn std::error::Error>> {
    ///     let connection = RestClient::new("localhost", 8000, "flight-tracker");
    ///     let snapshot = connection.get_flight("AF66").await?;
    ///     println!("RESPONSE={:?}", snapshot);
    ///     Ok(())
    /// }
    /// ```
    async fn get_flight(&self, code: &str) -> Result<FlightSnapshot, ClientError>;

    /// Returns true when the service's liveness probe answers
    async fn is_ready(&self) -> bool;
}
