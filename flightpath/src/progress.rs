//! Derivation of the shared route-progress value from a flight snapshot.
//!
//! [`compute_progress`] is the only permitted source of a progress
//! percentage. Every consumer (progress bar, 2D polyline split, 3D globe arc
//! split) must use its output rather than deriving progress independently,
//! otherwise the views visibly diverge.

use crate::geo::{self, GeoPoint, GreatCirclePath};
use crate::snapshot::{FlightSnapshot, FlightStatus};

/// Reported percentage when a flight is airborne but the live position or
/// either airport coordinate is missing. Signals "in progress, unknown
/// precise position" rather than fabricating a false number.
pub const AIRBORNE_FALLBACK_PERCENT: f64 = 50.0;

/// Lower clamp bound for a projected percentage. An airborne flight is never
/// reported as exactly 0%.
pub const PROGRESS_CLAMP_MIN: f64 = 1.0;

/// Upper clamp bound for a projected percentage. An airborne flight is never
/// reported as exactly 100%.
pub const PROGRESS_CLAMP_MAX: f64 = 99.0;

/// The route path split at the live aircraft's projected waypoint, computed
/// from the same projection as the progress percentage so the 2D and 3D
/// consumers cannot diverge from the progress bar.
#[derive(Debug, PartialEq, Clone)]
pub struct RouteSplit {
    /// The full discretized route from departure to arrival
    pub path: GreatCirclePath,

    /// Index of the waypoint closest to the live position
    pub index: usize,

    /// Waypoints flown so far, `points[0..=index]`
    pub traveled: Vec<GeoPoint>,

    /// Waypoints still ahead, `points[index..]`
    pub remaining: Vec<GeoPoint>,

    /// The waypoint the live position snapped to
    pub snapped: GeoPoint,

    /// Midpoint of the traveled segment, where the map places its progress
    /// label. None when the traveled segment is too short to label.
    pub label_midpoint: Option<GeoPoint>,
}

/// The single derived progress value injected into every consumer, computed
/// once per snapshot.
#[derive(Debug, PartialEq, Clone)]
pub struct FlightProgress {
    /// Progress percentage in `[0, 100]`
    pub percent: f64,

    /// Route split at the projected waypoint. None when the snapshot is not
    /// airborne or lacks the geo data to project.
    pub route: Option<RouteSplit>,
}

impl FlightProgress {
    /// Compute progress and the route split for a snapshot in one pass.
    /// `percent` always equals [`compute_progress`] of the same snapshot.
    pub fn for_snapshot(snapshot: Option<&FlightSnapshot>) -> Self {
        let Some(snapshot) = snapshot else {
            return FlightProgress {
                percent: 0.0,
                route: None,
            };
        };

        if !snapshot.is_airborne() {
            let percent = if snapshot.status == Some(FlightStatus::Landed) {
                100.0
            } else {
                0.0
            };
            return FlightProgress {
                percent,
                route: None,
            };
        }

        match project_onto_route(snapshot) {
            Some((path, index)) => FlightProgress {
                percent: percent_from_index(index, path.len()),
                route: Some(split_route(path, index)),
            },
            None => FlightProgress {
                percent: AIRBORNE_FALLBACK_PERCENT,
                route: None,
            },
        }
    }
}

/// Derive the progress percentage for a flight snapshot.
///
/// Decision ladder, evaluated in this exact order (later steps assume
/// earlier ones failed):
/// 1. No snapshot yet: 0.
/// 2. Not airborne: 100 if landed, otherwise 0.
/// 3. Airborne with any of the six geo coordinates missing:
///    [`AIRBORNE_FALLBACK_PERCENT`].
/// 4. Airborne with full geo data: project the live position onto the
///    great-circle route and derive `index / (len - 1) * 100`, clamped
///    between [`PROGRESS_CLAMP_MIN`] and [`PROGRESS_CLAMP_MAX`]. Coincident
///    endpoints fall back as in step 3.
pub fn compute_progress(snapshot: Option<&FlightSnapshot>) -> f64 {
    let Some(snapshot) = snapshot else {
        return 0.0;
    };

    if !snapshot.is_airborne() {
        return if snapshot.status == Some(FlightStatus::Landed) {
            100.0
        } else {
            0.0
        };
    }

    match project_onto_route(snapshot) {
        Some((path, index)) => percent_from_index(index, path.len()),
        None => AIRBORNE_FALLBACK_PERCENT,
    }
}

/// Build the route and project the live position onto it. None when any of
/// the six required coordinates is missing or the endpoints coincide.
fn project_onto_route(snapshot: &FlightSnapshot) -> Option<(GreatCirclePath, usize)> {
    let dep = snapshot.dep_airport.as_ref()?;
    let arr = snapshot.arr_airport.as_ref()?;

    let origin = GeoPoint::new(dep.lat?, dep.lng?);
    let destination = GeoPoint::new(arr.lat?, arr.lng?);
    let observed = GeoPoint::new(snapshot.lat?, snapshot.lng?);

    let path = geo::build_path_default(origin, destination);
    if path.len() < 2 {
        return None;
    }

    let index = geo::closest_index(&path, observed);
    Some((path, index))
}

fn percent_from_index(index: usize, path_len: usize) -> f64 {
    let percent = index as f64 / (path_len - 1) as f64 * 100.0;
    percent.clamp(PROGRESS_CLAMP_MIN, PROGRESS_CLAMP_MAX)
}

/// Split a route at the projected waypoint into traveled and remaining
/// segments. The label midpoint follows the traveled segment's center and is
/// omitted for traveled segments shorter than 3 points.
fn split_route(path: GreatCirclePath, index: usize) -> RouteSplit {
    let points = path.points();
    let traveled: Vec<GeoPoint> = points[..=index].to_vec();
    let remaining: Vec<GeoPoint> = points[index..].to_vec();
    let snapped = points[index];
    let label_midpoint = if traveled.len() >= 3 {
        Some(traveled[traveled.len() / 2])
    } else {
        None
    };

    RouteSplit {
        path,
        index,
        traveled,
        remaining,
        snapped,
        label_midpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::AirportInfo;

    /// Airborne snapshot with full geo data for a Paris -> Los Angeles route
    fn airborne_snapshot(lat: f64, lng: f64) -> FlightSnapshot {
        FlightSnapshot {
            flight_iata: Some(String::from("AF66")),
            status: Some(FlightStatus::EnRoute),
            lat: Some(lat),
            lng: Some(lng),
            dep_airport: Some(AirportInfo {
                iata: Some(String::from("CDG")),
                lat: Some(48.8),
                lng: Some(2.3),
                ..Default::default()
            }),
            arr_airport: Some(AirportInfo {
                iata: Some(String::from("LAX")),
                lat: Some(34.0),
                lng: Some(-118.2),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_snapshot_is_zero() {
        assert_eq!(compute_progress(None), 0.0);
    }

    #[test]
    fn test_terminal_states() {
        let mut snapshot = FlightSnapshot::default();

        snapshot.status = Some(FlightStatus::Landed);
        assert_eq!(compute_progress(Some(&snapshot)), 100.0);

        snapshot.status = Some(FlightStatus::Cancelled);
        assert_eq!(compute_progress(Some(&snapshot)), 0.0);

        snapshot.status = Some(FlightStatus::Scheduled);
        assert_eq!(compute_progress(Some(&snapshot)), 0.0);

        snapshot.status = Some(FlightStatus::Unknown);
        assert_eq!(compute_progress(Some(&snapshot)), 0.0);

        snapshot.status = None;
        assert_eq!(compute_progress(Some(&snapshot)), 0.0);
    }

    #[test]
    fn test_airborne_missing_geo_falls_back() {
        let mut snapshot = airborne_snapshot(45.0, -30.0);
        if let Some(arr) = snapshot.arr_airport.as_mut() {
            arr.lat = None;
        }
        assert_eq!(
            compute_progress(Some(&snapshot)),
            AIRBORNE_FALLBACK_PERCENT
        );

        let mut snapshot = airborne_snapshot(45.0, -30.0);
        snapshot.lng = None;
        assert_eq!(
            compute_progress(Some(&snapshot)),
            AIRBORNE_FALLBACK_PERCENT
        );

        let mut snapshot = airborne_snapshot(45.0, -30.0);
        snapshot.dep_airport = None;
        assert_eq!(
            compute_progress(Some(&snapshot)),
            AIRBORNE_FALLBACK_PERCENT
        );
    }

    #[test]
    fn test_airborne_coincident_endpoints_fall_back() {
        let mut snapshot = airborne_snapshot(48.8, 2.3);
        snapshot.arr_airport = snapshot.dep_airport.clone();
        assert_eq!(
            compute_progress(Some(&snapshot)),
            AIRBORNE_FALLBACK_PERCENT
        );
    }

    #[test]
    fn test_progress_near_origin_is_single_digit_nonzero() {
        // Live position just outside Paris on a Paris -> LA route
        let snapshot = airborne_snapshot(48.9, 2.0);
        let progress = compute_progress(Some(&snapshot));

        assert!(progress >= PROGRESS_CLAMP_MIN);
        assert!(progress < 10.0);
    }

    #[test]
    fn test_progress_at_destination_clamps_to_99() {
        let snapshot = airborne_snapshot(34.0, -118.2);
        assert_eq!(compute_progress(Some(&snapshot)), PROGRESS_CLAMP_MAX);
    }

    #[test]
    fn test_progress_at_origin_clamps_to_1() {
        let snapshot = airborne_snapshot(48.8, 2.3);
        assert_eq!(compute_progress(Some(&snapshot)), PROGRESS_CLAMP_MIN);
    }

    #[test]
    fn test_progress_monotonic_along_route() {
        // Walk the live position along the route; progress never decreases.
        let route = geo::build_path_default(GeoPoint::new(48.8, 2.3), GeoPoint::new(34.0, -118.2));

        let mut previous = 0.0;
        for point in route.points().iter().step_by(5) {
            let snapshot = airborne_snapshot(point.latitude, point.longitude);
            let progress = compute_progress(Some(&snapshot));
            assert!(
                progress >= previous,
                "progress regressed: {} < {}",
                progress,
                previous
            );
            previous = progress;
        }
    }

    #[test]
    fn test_clamp_invariant_for_airborne_snapshots() {
        for (lat, lng) in [(48.8, 2.3), (52.0, -20.0), (45.0, -60.0), (34.0, -118.2)] {
            let progress = compute_progress(Some(&airborne_snapshot(lat, lng)));
            assert!((PROGRESS_CLAMP_MIN..=PROGRESS_CLAMP_MAX).contains(&progress));
        }
    }

    #[test]
    fn test_flight_progress_matches_compute_progress() {
        let snapshots = [
            None,
            Some(FlightSnapshot::default()),
            Some(airborne_snapshot(45.0, -30.0)),
            Some(FlightSnapshot {
                status: Some(FlightStatus::Landed),
                ..Default::default()
            }),
        ];

        for snapshot in &snapshots {
            let progress = FlightProgress::for_snapshot(snapshot.as_ref());
            assert_eq!(progress.percent, compute_progress(snapshot.as_ref()));
        }
    }

    #[test]
    fn test_route_split_partitions_path() {
        let snapshot = airborne_snapshot(45.0, -30.0);
        let progress = FlightProgress::for_snapshot(Some(&snapshot));
        let split = progress.route.expect("airborne with full geo data");

        assert_eq!(split.traveled.len(), split.index + 1);
        assert_eq!(split.remaining.len(), split.path.len() - split.index);
        assert_eq!(split.traveled[split.index], split.snapped);
        assert_eq!(split.remaining[0], split.snapped);
        assert_eq!(split.path.points()[split.index], split.snapped);

        let midpoint = split.label_midpoint.expect("traveled segment >= 3 points");
        assert_eq!(midpoint, split.traveled[split.traveled.len() / 2]);
    }

    #[test]
    fn test_route_split_absent_when_not_airborne() {
        let snapshot = FlightSnapshot {
            status: Some(FlightStatus::Landed),
            ..Default::default()
        };
        let progress = FlightProgress::for_snapshot(Some(&snapshot));
        assert_eq!(progress.percent, 100.0);
        assert!(progress.route.is_none());
    }

    #[test]
    fn test_route_split_no_label_near_origin() {
        // Snapped to the first waypoint, the traveled segment is one point
        let snapshot = airborne_snapshot(48.8, 2.3);
        let progress = FlightProgress::for_snapshot(Some(&snapshot));
        let split = progress.route.expect("airborne with full geo data");

        assert_eq!(split.index, 0);
        assert!(split.label_midpoint.is_none());
    }
}
