//! Great-circle distance on a spherical earth model

/// Mean earth radius in kilometers (IUGG mean radius)
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// Haversine distance in kilometers between two `[longitude, latitude]`
/// positions given in degrees
///
/// Accurate to well under a percent at continental scale, which is all the
/// kilometer-to-degree conversion of the tiling needs.
pub fn haversine_km(from: [f64; 2], to: [f64; 2]) -> f64 {
    let d_lat = (to[1] - from[1]).to_radians();
    let d_lon = (to[0] - from[0]).to_radians();
    let lat_from = from[1].to_radians();
    let lat_to = to[1].to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = (sin_lon * sin_lon).mul_add(lat_from.cos() * lat_to.cos(), sin_lat * sin_lat);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt()) * EARTH_RADIUS_KM
}
