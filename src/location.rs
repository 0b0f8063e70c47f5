// SPDX-License-Identifier: MPL-2.0
//! Best-effort device location with a timed fallback.
//!
//! The resolver runs once at startup. It asks a position provider for the
//! device coordinate within a bounded wait; on timeout, lookup failure, or a
//! malformed response it settles on the configured default coordinate. The
//! caller always ends up with a usable coordinate; location problems are
//! never surfaced as blocking errors.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// A resolved geographic coordinate. Never partially populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Where a resolved coordinate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOrigin {
    /// The position provider reported the device's coordinate.
    Device,
    /// The configured fallback coordinate was used.
    Default,
}

/// Lifecycle of the location lookup.
///
/// Transitions are monotonic: once `Resolved`, the state never goes back to
/// `Detecting` (enforced by [`LocationState::settle`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    Detecting,
    Resolved {
        coord: Coordinate,
        origin: LocationOrigin,
    },
    Unavailable,
}

impl LocationState {
    /// Returns the coordinate if one has been resolved.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            LocationState::Resolved { coord, .. } => Some(*coord),
            LocationState::Detecting | LocationState::Unavailable => None,
        }
    }

    /// Applies a state transition, ignoring any attempt to move back to
    /// `Detecting` after the lookup has settled.
    pub fn settle(&mut self, next: LocationState) {
        if matches!(next, LocationState::Detecting)
            && !matches!(self, LocationState::Detecting)
        {
            return;
        }
        *self = next;
    }
}

/// Errors from the position provider. All of them degrade to the default
/// coordinate; none is shown to the user as a blocking error.
#[derive(Debug, Clone)]
pub enum LocationError {
    Unreachable(String),
    Status(u16),
    Malformed,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Unreachable(msg) => write!(f, "Position lookup failed: {msg}"),
            LocationError::Status(code) => {
                write!(f, "Position lookup returned HTTP status {code}")
            }
            LocationError::Malformed => write!(f, "Position lookup returned a malformed body"),
        }
    }
}

/// Queries the configured geolocation endpoint for a device-position
/// estimate. Expects a JSON body with `latitude` and `longitude` fields.
pub async fn lookup_device_position(
    client: reqwest::Client,
    url: String,
) -> std::result::Result<Coordinate, LocationError> {
    #[derive(Deserialize)]
    struct GeoBody {
        latitude: f64,
        longitude: f64,
    }

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| LocationError::Unreachable(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LocationError::Status(response.status().as_u16()));
    }

    let body: GeoBody = response
        .json()
        .await
        .map_err(|_| LocationError::Malformed)?;

    Ok(Coordinate {
        lat: body.latitude,
        lng: body.longitude,
    })
}

/// Runs a position lookup with a bounded wait and settles on the fallback
/// coordinate when the lookup times out or fails.
pub async fn resolve<F>(lookup: F, fallback: Coordinate, wait: Duration) -> LocationState
where
    F: std::future::Future<Output = std::result::Result<Coordinate, LocationError>>,
{
    match tokio::time::timeout(wait, lookup).await {
        Ok(Ok(coord)) => LocationState::Resolved {
            coord,
            origin: LocationOrigin::Device,
        },
        Ok(Err(_)) | Err(_) => LocationState::Resolved {
            coord: fallback,
            origin: LocationOrigin::Default,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: Coordinate = Coordinate {
        lat: 28.5355,
        lng: 77.391,
    };

    #[tokio::test]
    async fn successful_lookup_resolves_with_device_origin() {
        let coord = Coordinate { lat: 1.0, lng: 2.0 };
        let state = resolve(async move { Ok(coord) }, FALLBACK, Duration::from_secs(10)).await;

        assert_eq!(
            state,
            LocationState::Resolved {
                coord,
                origin: LocationOrigin::Device,
            }
        );
    }

    #[tokio::test]
    async fn failed_lookup_resolves_with_default_coordinate() {
        let state = resolve(
            async { Err(LocationError::Status(403)) },
            FALLBACK,
            Duration::from_secs(10),
        )
        .await;

        assert_eq!(
            state,
            LocationState::Resolved {
                coord: FALLBACK,
                origin: LocationOrigin::Default,
            }
        );
    }

    #[tokio::test]
    async fn malformed_lookup_resolves_with_default_coordinate() {
        let state = resolve(
            async { Err(LocationError::Malformed) },
            FALLBACK,
            Duration::from_secs(10),
        )
        .await;

        assert_eq!(state.coordinate(), Some(FALLBACK));
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_exceeding_the_bounded_wait_falls_back() {
        let never = async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Coordinate { lat: 0.0, lng: 0.0 })
        };

        let state = resolve(never, FALLBACK, Duration::from_secs(10)).await;

        assert_eq!(
            state,
            LocationState::Resolved {
                coord: FALLBACK,
                origin: LocationOrigin::Default,
            }
        );
    }

    #[test]
    fn settle_ignores_transition_back_to_detecting() {
        let mut state = LocationState::Resolved {
            coord: FALLBACK,
            origin: LocationOrigin::Default,
        };

        state.settle(LocationState::Detecting);

        assert_eq!(state.coordinate(), Some(FALLBACK));
    }

    #[test]
    fn settle_applies_resolution_over_detecting() {
        let mut state = LocationState::Detecting;
        state.settle(LocationState::Resolved {
            coord: FALLBACK,
            origin: LocationOrigin::Device,
        });

        assert!(matches!(
            state,
            LocationState::Resolved {
                origin: LocationOrigin::Device,
                ..
            }
        ));
    }

    #[test]
    fn detecting_and_unavailable_have_no_coordinate() {
        assert_eq!(LocationState::Detecting.coordinate(), None);
        assert_eq!(LocationState::Unavailable.coordinate(), None);
    }
}
