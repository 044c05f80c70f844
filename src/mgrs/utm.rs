//! Universal Transverse Mercator projection
//!
//! Forward and inverse transverse Mercator on the WGS84 ellipsoid using
//! Krüger's series in the third flattening (third order), which stays
//! well below a millimetre across the widened Norway/Svalbard zones.

use lazy_static::lazy_static;

use super::constants::{utm, wgs84};

lazy_static! {
    static ref SERIES: KruegerSeries = KruegerSeries::wgs84();
}

/// A position on a projected grid, in metres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
}

impl ProjectedPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        ProjectedPoint { easting, northing }
    }

    pub fn is_finite(&self) -> bool {
        self.easting.is_finite() && self.northing.is_finite()
    }
}

/// Coefficients of the Krüger series for one ellipsoid
struct KruegerSeries {
    /// First eccentricity
    e: f64,
    /// Rectifying radius
    a_hat: f64,
    alpha: [f64; 3],
    beta: [f64; 3],
    delta: [f64; 3],
}

impl KruegerSeries {
    fn wgs84() -> Self {
        let f = wgs84::FLATTENING;
        let n = f / (2.0 - f);
        let n2 = n * n;
        let n3 = n2 * n;

        KruegerSeries {
            e: (f * (2.0 - f)).sqrt(),
            a_hat: wgs84::SEMI_MAJOR_AXIS / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0),
            alpha: [
                n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0,
                13.0 * n2 / 48.0 - 3.0 * n3 / 5.0,
                61.0 * n3 / 240.0,
            ],
            beta: [
                n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0,
                n2 / 48.0 + n3 / 15.0,
                17.0 * n3 / 480.0,
            ],
            delta: [
                2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3,
                7.0 * n2 / 3.0 - 8.0 * n3 / 5.0,
                56.0 * n3 / 15.0,
            ],
        }
    }
}

/// UTM zone for a position, including the Norway and Svalbard exceptions
pub fn zone_number(lat: f64, lon: f64) -> u8 {
    if lon >= 180.0 {
        return utm::ZONE_COUNT;
    }

    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }

    if (72.0..84.0).contains(&lat) {
        match lon {
            l if (0.0..9.0).contains(&l) => return 31,
            l if (9.0..21.0).contains(&l) => return 33,
            l if (21.0..33.0).contains(&l) => return 35,
            l if (33.0..42.0).contains(&l) => return 37,
            _ => {},
        }
    }

    let zone = ((lon + 180.0) / utm::ZONE_WIDTH).floor() as i64 + 1;
    zone.clamp(1, utm::ZONE_COUNT as i64) as u8
}

/// Longitude of a zone's central meridian in degrees
pub fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.0) * utm::ZONE_WIDTH - 180.0 + utm::ZONE_WIDTH / 2.0
}

/// Project a geodetic position into the given UTM zone
///
/// Southern latitudes get the 10 000 km false northing.
pub fn forward(lat: f64, lon: f64, zone: u8) -> ProjectedPoint {
    let s = &*SERIES;
    let phi = lat.to_radians();
    let lambda = (lon - central_meridian(zone)).to_radians();

    let sin_phi = phi.sin();
    let t = (sin_phi.atanh() - s.e * (s.e * sin_phi).atanh()).sinh();
    let xi_prime = t.atan2(lambda.cos());
    let eta_prime = (lambda.sin() / (1.0 + t * t).sqrt()).atanh();

    let mut xi = xi_prime;
    let mut eta = eta_prime;
    for (j, alpha) in s.alpha.iter().enumerate() {
        let k = 2.0 * (j as f64 + 1.0);
        xi += alpha * (k * xi_prime).sin() * (k * eta_prime).cosh();
        eta += alpha * (k * xi_prime).cos() * (k * eta_prime).sinh();
    }

    let scale = utm::SCALE_FACTOR * s.a_hat;
    let false_northing = if lat < 0.0 { utm::FALSE_NORTHING_SOUTH } else { 0.0 };

    ProjectedPoint::new(utm::FALSE_EASTING + scale * eta, false_northing + scale * xi)
}

/// Back-project a UTM position to `(lon, lat)` in degrees
///
/// # Arguments
/// * `point` - Easting/northing in metres
/// * `zone` - UTM zone number
/// * `northern` - Whether the northing is in the northern hemisphere
pub fn inverse(point: &ProjectedPoint, zone: u8, northern: bool) -> (f64, f64) {
    let s = &*SERIES;
    let scale = utm::SCALE_FACTOR * s.a_hat;
    let false_northing = if northern { 0.0 } else { utm::FALSE_NORTHING_SOUTH };

    let xi = (point.northing - false_northing) / scale;
    let eta = (point.easting - utm::FALSE_EASTING) / scale;

    let mut xi_prime = xi;
    let mut eta_prime = eta;
    for (j, beta) in s.beta.iter().enumerate() {
        let k = 2.0 * (j as f64 + 1.0);
        xi_prime -= beta * (k * xi).sin() * (k * eta).cosh();
        eta_prime -= beta * (k * xi).cos() * (k * eta).sinh();
    }

    let chi = (xi_prime.sin() / eta_prime.cosh()).asin();
    let mut phi = chi;
    for (j, delta) in s.delta.iter().enumerate() {
        let k = 2.0 * (j as f64 + 1.0);
        phi += delta * (k * chi).sin();
    }

    let lambda = eta_prime.sinh().atan2(xi_prime.cos());

    (central_meridian(zone) + lambda.to_degrees(), phi.to_degrees())
}
