//! Distances between `(latitude, longitude)` pairs given in degrees.

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers (haversine formula).
pub fn great_circle(a: (f64, f64), b: (f64, f64)) -> f64 {
    if a == b {
        return 0.0;
    }

    let (lat_a, lon_a) = (a.0.to_radians(), a.1.to_radians());
    let (lat_b, lon_b) = (b.0.to_radians(), b.1.to_radians());
    let d_lat = lat_b - lat_a;
    let d_lon = lon_b - lon_a;

    let h = ((d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Equirectangular approximation of the distance in kilometers.
///
/// The longitude difference is scaled by the cosine of the mean latitude
/// and the result is the euclidean distance on that tangent plane. Only
/// meant as a search heuristic, never as an edge weight.
pub fn flat_plane(a: (f64, f64), b: (f64, f64)) -> f64 {
    if a == b {
        return 0.0;
    }

    let (lat_a, lon_a) = (a.0.to_radians(), a.1.to_radians());
    let (lat_b, lon_b) = (b.0.to_radians(), b.1.to_radians());

    let x = (lon_b - lon_a) * ((lat_a + lat_b) / 2.0).cos();
    let y = lat_b - lat_a;

    EARTH_RADIUS_KM * x.hypot(y)
}
