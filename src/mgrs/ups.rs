//! Universal Polar Stereographic projection
//!
//! Ellipsoidal polar stereographic (Snyder, Map Projections 21-33 ff.)
//! used by MGRS north of 84°N and south of 80°S.

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::FRAC_PI_4;

use lazy_static::lazy_static;

use super::constants::{ups, wgs84};
use super::utm::ProjectedPoint;

const MAX_ITERATIONS: usize = 30;
const CONVERGENCE: f64 = 1e-14;

lazy_static! {
    /// First eccentricity of WGS84
    static ref ECCENTRICITY: f64 = (wgs84::FLATTENING * (2.0 - wgs84::FLATTENING)).sqrt();

    /// `sqrt((1+e)^(1+e) * (1-e)^(1-e))`
    static ref POLAR_FACTOR: f64 = {
        let e = *ECCENTRICITY;
        ((1.0 + e).powf(1.0 + e) * (1.0 - e).powf(1.0 - e)).sqrt()
    };
}

/// Project a geodetic position onto the north or south polar grid
pub fn forward(lat: f64, lon: f64, northern: bool) -> ProjectedPoint {
    if lat.abs() == 90.0 {
        return ProjectedPoint::new(ups::FALSE_EASTING, ups::FALSE_NORTHING);
    }

    let e = *ECCENTRICITY;
    // Work in the north-polar aspect; the south mirrors latitude
    let phi = (if northern { lat } else { -lat }).to_radians();
    let lambda = lon.to_radians();

    let e_sin = e * phi.sin();
    let t = (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0);
    let rho = 2.0 * wgs84::SEMI_MAJOR_AXIS * ups::SCALE_FACTOR * t / *POLAR_FACTOR;

    let easting = ups::FALSE_EASTING + rho * lambda.sin();
    let northing = if northern {
        ups::FALSE_NORTHING - rho * lambda.cos()
    } else {
        ups::FALSE_NORTHING + rho * lambda.cos()
    };

    ProjectedPoint::new(easting, northing)
}

/// Back-project a polar grid position to `(lon, lat)` in degrees
pub fn inverse(point: &ProjectedPoint, northern: bool) -> (f64, f64) {
    let e = *ECCENTRICITY;
    let dx = point.easting - ups::FALSE_EASTING;
    let dy = point.northing - ups::FALSE_NORTHING;
    let rho = dx.hypot(dy);
    let pole = if northern { 90.0 } else { -90.0 };

    if rho == 0.0 {
        return (0.0, pole);
    }

    let t = rho * *POLAR_FACTOR / (2.0 * wgs84::SEMI_MAJOR_AXIS * ups::SCALE_FACTOR);
    let mut phi = FRAC_PI_2 - 2.0 * t.atan();
    for _ in 0..MAX_ITERATIONS {
        let e_sin = e * phi.sin();
        let next = FRAC_PI_2 - 2.0 * (t * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)).atan();
        let done = (next - phi).abs() < CONVERGENCE;
        phi = next;
        if done {
            break;
        }
    }

    let lambda = if northern { dx.atan2(-dy) } else { dx.atan2(dy) };
    let lat = if northern { phi.to_degrees() } else { -phi.to_degrees() };

    (lambda.to_degrees(), lat)
}
