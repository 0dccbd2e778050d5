use crate::distance::{flat_plane, great_circle};

/// Estimate of the remaining distance from `(lat, lon)` to
/// `(goal_lat, goal_lon)`, in the unit of the graph's edge values.
pub trait Heuristic {
    fn estimate(&self, lat: f64, lon: f64, goal_lat: f64, goal_lon: f64) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    fn estimate(&self, lat: f64, lon: f64, goal_lat: f64, goal_lon: f64) -> f64 {
        self(lat, lon, goal_lat, goal_lon)
    }
}

/// Haversine distance. Consistent on graphs weighted by great-circle
/// distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreatCircle;

impl Heuristic for GreatCircle {
    fn estimate(&self, lat: f64, lon: f64, goal_lat: f64, goal_lon: f64) -> f64 {
        great_circle((lat, lon), (goal_lat, goal_lon))
    }
}

/// Equirectangular approximation of the great-circle distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlatPlane;

impl Heuristic for FlatPlane {
    fn estimate(&self, lat: f64, lon: f64, goal_lat: f64, goal_lon: f64) -> f64 {
        flat_plane((lat, lon), (goal_lat, goal_lon))
    }
}
