//! Great-circle route construction and nearest-waypoint projection.
//!
//! Routes are discretized into evenly spaced waypoints along the minor
//! (shorter) great-circle arc via spherical linear interpolation.

use serde::{Deserialize, Serialize};

/// Number of arc segments sampled between origin and destination.
/// The resulting path has `PATH_SAMPLE_COUNT + 1` waypoints.
pub const PATH_SAMPLE_COUNT: usize = 100;

/// Central angles below this threshold (radians) are treated as coincident
/// endpoints, roughly 0.6 mm on Earth's surface. Avoids division by
/// `sin(d) = 0` in the interpolation step.
pub const COINCIDENT_EPSILON_RAD: f64 = 1e-10;

/// A latitude/longitude pair in finite floating-point degrees.
///
/// Latitude is expected in `[-90, 90]`, longitude in `[-180, 180]`. Values
/// outside the documented domain are a caller precondition violation.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    /// The latitude of the point in degrees.
    pub latitude: f64,

    /// The longitude of the point in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new [`GeoPoint`] from degree coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

/// An ordered, immutable sequence of waypoints along the minor great-circle
/// arc from origin to destination. Always contains at least one point.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GreatCirclePath(Vec<GeoPoint>);

impl GreatCirclePath {
    /// The waypoints of this path, ordered from origin to destination
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    /// Number of waypoints in this path, always >= 1
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no waypoints. False for any path produced by
    /// [`build_path`], which always includes at least the origin.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build a discretized great-circle path between two points with
/// `sample_count` arc segments.
///
/// Produces `sample_count + 1` waypoints inclusive of both endpoints; a
/// `sample_count` of zero is treated as a single segment. If the
/// endpoints coincide within [`COINCIDENT_EPSILON_RAD`], the path degenerates
/// to a single point equal to the origin.
///
/// Deterministic for identical inputs and never fails for finite coordinates.
/// Intermediate points always lie on the minor arc.
pub fn build_path(origin: GeoPoint, destination: GeoPoint, sample_count: usize) -> GreatCirclePath {
    let sample_count = sample_count.max(1);
    let phi_1 = origin.latitude.to_radians();
    let lambda_1 = origin.longitude.to_radians();
    let phi_2 = destination.latitude.to_radians();
    let lambda_2 = destination.longitude.to_radians();

    // central angle between the endpoints (haversine form)
    let d = 2.0
        * (((phi_2 - phi_1) / 2.0).sin().powi(2)
            + phi_1.cos() * phi_2.cos() * ((lambda_2 - lambda_1) / 2.0).sin().powi(2))
        .sqrt()
        .asin();

    if d < COINCIDENT_EPSILON_RAD {
        return GreatCirclePath(vec![origin]);
    }

    let mut points = Vec::with_capacity(sample_count + 1);
    for i in 0..=sample_count {
        let f = i as f64 / sample_count as f64;

        // slerp weights for the two endpoints' unit-sphere vectors
        let a = ((1.0 - f) * d).sin() / d.sin();
        let b = (f * d).sin() / d.sin();

        let x = a * phi_1.cos() * lambda_1.cos() + b * phi_2.cos() * lambda_2.cos();
        let y = a * phi_1.cos() * lambda_1.sin() + b * phi_2.cos() * lambda_2.sin();
        let z = a * phi_1.sin() + b * phi_2.sin();

        points.push(GeoPoint {
            latitude: z.atan2((x * x + y * y).sqrt()).to_degrees(),
            longitude: y.atan2(x).to_degrees(),
        });
    }

    GreatCirclePath(points)
}

/// [`build_path`] with the default [`PATH_SAMPLE_COUNT`]
pub fn build_path_default(origin: GeoPoint, destination: GeoPoint) -> GreatCirclePath {
    build_path(origin, destination, PATH_SAMPLE_COUNT)
}

/// Find the index of the path waypoint closest to an observed point.
///
/// Uses squared planar distance in degree space rather than true geodesic
/// distance. The waypoints are already densely and evenly spaced along the
/// true great circle, so at this resolution both metrics agree on the
/// nearest-neighbor ordering and the planar form is cheaper on a
/// re-run-every-poll basis. The approximation degrades for very sparse paths
/// or routes near the poles.
///
/// Ties resolve to the first index achieving the minimum. A single-waypoint
/// path always returns 0.
pub fn closest_index(path: &GreatCirclePath, observed: GeoPoint) -> usize {
    let mut min_dist = f64::INFINITY;
    let mut min_idx = 0;
    for (i, point) in path.points().iter().enumerate() {
        let d_lat = point.latitude - observed.latitude;
        let d_lng = point.longitude - observed.longitude;
        let dist = d_lat * d_lat + d_lng * d_lng;
        if dist < min_dist {
            min_dist = dist;
            min_idx = i;
        }
    }
    min_idx
}
