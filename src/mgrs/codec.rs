//! MGRS encoding and decoding
//!
//! Ties the projections and the grid lettering together: coordinates are
//! projected, lettered and truncated to the requested precision; references
//! are parsed, resolved to a grid cell and back-projected.

use log::debug;

use super::constants::{grid, letters, utm as utm_limits};
use super::grid::{
    band_latitudes, band_letter, ups_square, ups_square_origin, utm_square, utm_square_origin, GridZone,
};
use super::utm::{self, ProjectedPoint};
use super::ups;
use crate::coordinate::{BoundingBox, Coordinate};
use crate::errors::{CoordError, CoordResult};

/// Slack, in degrees, when checking that a decoded cell lies in its band
const BAND_TOLERANCE: f64 = 1.0;

/// A parsed MGRS reference
#[derive(Debug, Clone, PartialEq)]
pub struct MgrsReference {
    pub zone: GridZone,
    /// 100 km square letters
    pub square: [char; 2],
    /// Easting within the square, in metres (truncated to the precision)
    pub easting: f64,
    /// Northing within the square, in metres (truncated to the precision)
    pub northing: f64,
    /// Digits per axis, 0 to 5
    pub precision: u8,
}

impl MgrsReference {
    /// Side of the cell this reference designates, in metres
    pub fn cell_size(&self) -> f64 {
        10f64.powi(grid::MAX_PRECISION as i32 - self.precision as i32)
    }

    /// Parse an MGRS string such as `31UDQ4826010878` or `33X VG 5 5`
    ///
    /// Whitespace is ignored and letters are case-insensitive.
    pub fn parse(input: &str) -> CoordResult<Self> {
        let text: Vec<char> = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let zone_digits = text.iter().take_while(|c| c.is_ascii_digit()).count();
        if zone_digits > 2 {
            return Err(CoordError::InvalidZone(text[..zone_digits].iter().collect()));
        }
        let zone_number = if zone_digits == 0 {
            None
        } else {
            let digits: String = text[..zone_digits].iter().collect();
            let zone = digits.parse::<u8>().map_err(|_| CoordError::InvalidZone(digits.clone()))?;
            if zone == 0 || zone > utm_limits::ZONE_COUNT {
                return Err(CoordError::InvalidZone(digits));
            }
            Some(zone)
        };

        let band = *text.get(zone_digits).ok_or_else(|| {
            CoordError::MalformedGridReference(format!("'{}' has no band letter", input.trim()))
        })?;
        let zone = Self::grid_zone(zone_number, band)?;

        let square = match text.get(zone_digits + 1..zone_digits + 3) {
            Some(&[a, b]) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => [a, b],
            _ => {
                return Err(CoordError::MalformedGridReference(format!(
                    "'{}' is missing the 100 km square letters", input.trim()
                )));
            },
        };

        let digits = &text[zone_digits + 3..];
        if !digits.iter().all(|c| c.is_ascii_digit()) {
            return Err(CoordError::MalformedGridReference(format!(
                "unexpected characters after the square letters in '{}'", input.trim()
            )));
        }
        if digits.len() % 2 != 0 || digits.len() > 2 * grid::MAX_PRECISION as usize {
            return Err(CoordError::MalformedGridReference(format!(
                "easting and northing need the same number of digits (at most {} each), found {}",
                grid::MAX_PRECISION, digits.len()
            )));
        }

        let precision = (digits.len() / 2) as u8;
        let (east_digits, north_digits) = digits.split_at(digits.len() / 2);
        let scale = 10f64.powi(grid::MAX_PRECISION as i32 - precision as i32);

        Ok(MgrsReference {
            zone,
            square,
            easting: digits_value(east_digits) * scale,
            northing: digits_value(north_digits) * scale,
            precision,
        })
    }

    /// Validate the zone number against the band letter
    fn grid_zone(zone: Option<u8>, band: char) -> CoordResult<GridZone> {
        let is_utm_band = letters::LATITUDE_BANDS.contains(band);
        let is_ups_band = letters::UPS_BANDS.contains(&band);

        match zone {
            Some(zone @ (32 | 34 | 36)) if band == 'X' => Err(CoordError::InvalidZone(format!(
                "zone {} is not used in band X", zone
            ))),
            Some(zone) if is_utm_band => Ok(GridZone::Utm { zone, band }),
            Some(zone) if is_ups_band => Err(CoordError::InvalidZone(format!(
                "zone {} given with polar band {}", zone, band
            ))),
            None if is_ups_band => Ok(GridZone::Ups { band }),
            None if is_utm_band => Err(CoordError::InvalidZone(format!("band {} needs a zone number", band))),
            _ => Err(CoordError::InvalidBandLetter(band)),
        }
    }

    /// South-west corner of the designated cell on the projected grid
    fn cell_origin(&self) -> CoordResult<ProjectedPoint> {
        let square = match self.zone {
            GridZone::Utm { zone, band } => utm_square_origin(zone, band, self.square)?,
            GridZone::Ups { band } => ups_square_origin(band, self.square)?,
        };
        Ok(ProjectedPoint::new(square.easting + self.easting, square.northing + self.northing))
    }

    /// Back-project a grid position of this reference's zone to `(lon, lat)`
    fn unproject(&self, point: &ProjectedPoint) -> (f64, f64) {
        match self.zone {
            GridZone::Utm { zone, .. } => utm::inverse(point, zone, self.zone.is_northern()),
            GridZone::Ups { .. } => ups::inverse(point, self.zone.is_northern()),
        }
    }

    /// Resolve the reference to its cell centre and bounding box
    ///
    /// The representative coordinate is the centre of the grid cell,
    /// back-projected; the box covers the cell's four corners.
    pub fn decode(&self) -> CoordResult<(Coordinate, BoundingBox)> {
        let origin = self.cell_origin()?;
        let size = self.cell_size();

        let center = ProjectedPoint::new(origin.easting + size / 2.0, origin.northing + size / 2.0);
        let (lon, lat) = self.unproject(&center);
        if !lon.is_finite() || !lat.is_finite() {
            return Err(CoordError::OutOfProjectionDomain(format!("cannot back-project {}", self)));
        }

        if let GridZone::Utm { band, .. } = self.zone {
            if let Some((min_lat, max_lat)) = band_latitudes(band) {
                if lat < min_lat - BAND_TOLERANCE || lat > max_lat + BAND_TOLERANCE {
                    return Err(CoordError::MalformedGridReference(format!(
                        "square {}{} does not lie in band {}", self.square[0], self.square[1], band
                    )));
                }
            }
        }

        let corners = [
            origin,
            ProjectedPoint::new(origin.easting + size, origin.northing),
            ProjectedPoint::new(origin.easting, origin.northing + size),
            ProjectedPoint::new(origin.easting + size, origin.northing + size),
        ];

        // Zone 60 cells can overhang the antimeridian
        let mut lons = vec![normalize_lon(lon)];
        let mut min_lat = lat;
        let mut max_lat = lat;
        for corner in &corners {
            let (c_lon, c_lat) = self.unproject(corner);
            lons.push(normalize_lon(c_lon));
            min_lat = min_lat.min(c_lat);
            max_lat = max_lat.max(c_lat);
        }
        let mut min_lon = lons.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max_lon = lons.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // A cell reaching ±180 may hold points written with either sign
        if max_lon - min_lon > 180.0 || max_lon >= 180.0 || min_lon <= -180.0 {
            min_lon = -180.0;
            max_lon = 180.0;
        }

        if let GridZone::Ups { .. } = self.zone {
            if self.contains_pole(&origin, size) {
                min_lon = -180.0;
                max_lon = 180.0;
                if self.zone.is_northern() { max_lat = 90.0 } else { min_lat = -90.0 }
            }
        }

        let center = Coordinate::from_lon_lat_wrapped(lon, lat)?;
        let bbox = BoundingBox::new(min_lon, min_lat.max(-90.0), max_lon, max_lat.min(90.0))?;

        Ok((center, bbox))
    }

    fn contains_pole(&self, origin: &ProjectedPoint, size: f64) -> bool {
        let pole = ProjectedPoint::new(
            super::constants::ups::FALSE_EASTING,
            super::constants::ups::FALSE_NORTHING,
        );
        (origin.easting..=origin.easting + size).contains(&pole.easting)
            && (origin.northing..=origin.northing + size).contains(&pole.northing)
    }
}

impl std::fmt::Display for MgrsReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.zone.designator(),
            self.square[0],
            self.square[1],
            format_digits(self.easting, self.northing, self.precision)
        )
    }
}

/// Encode a coordinate as an MGRS reference
///
/// # Arguments
/// * `coord` - Position to encode
/// * `precision` - Digits per axis, 0 (100 km) to 5 (1 m)
///
/// # Returns
/// A reference such as `31UDQ4826010878`, or an error when the precision is
/// invalid or the position cannot be lettered
pub fn to_mgrs(coord: &Coordinate, precision: u8) -> CoordResult<String> {
    Ok(encode(coord, precision)?.to_string())
}

/// Encode a coordinate into its structured MGRS reference
pub fn encode(coord: &Coordinate, precision: u8) -> CoordResult<MgrsReference> {
    if precision > grid::MAX_PRECISION {
        return Err(CoordError::InvalidPrecision(precision));
    }

    let (lat, lon) = (coord.lat(), coord.lon());
    let polar = lat >= utm_limits::NORTH_LIMIT || lat <= utm_limits::SOUTH_LIMIT;

    let (zone, square, point) = if polar {
        let northern = lat > 0.0;
        let point = ups::forward(lat, lon, northern);
        ensure_finite(&point, coord)?;
        let (band, square) = ups_square(northern, &point)?;
        (GridZone::Ups { band }, square, point)
    } else {
        let zone = utm::zone_number(lat, lon);
        let point = utm::forward(lat, lon, zone);
        ensure_finite(&point, coord)?;
        let square = utm_square(zone, &point)?;
        (GridZone::Utm { zone, band: band_letter(lat) }, square, point)
    };

    let scale = 10f64.powi(grid::MAX_PRECISION as i32 - precision as i32);
    let truncate = |v: f64| ((v.floor().rem_euclid(grid::SQUARE_SIZE)) / scale).floor() * scale;

    let reference = MgrsReference {
        zone,
        square,
        easting: truncate(point.easting),
        northing: truncate(point.northing),
        precision,
    };
    debug!("Encoded lon={}, lat={} as {}", lon, lat, reference);
    Ok(reference)
}

/// Decode an MGRS reference into its cell centre and bounding box
pub fn parse_mgrs(input: &str) -> CoordResult<(Coordinate, Option<BoundingBox>)> {
    let reference = MgrsReference::parse(input)?;
    let (center, bbox) = reference.decode()?;
    debug!("Decoded {} to lon={}, lat={}", reference, center.lon(), center.lat());
    Ok((center, Some(bbox)))
}

/// Bring a longitude into [-180, 180]
fn normalize_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

fn ensure_finite(point: &ProjectedPoint, coord: &Coordinate) -> CoordResult<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(CoordError::OutOfProjectionDomain(format!(
            "lon={}, lat={} has no finite grid position", coord.lon(), coord.lat()
        )))
    }
}

/// Value of a run of ASCII digits
fn digits_value(digits: &[char]) -> f64 {
    digits
        .iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0.0, |acc, d| acc * 10.0 + d as f64)
}

/// Zero-padded easting then northing digits at the given precision
fn format_digits(easting: f64, northing: f64, precision: u8) -> String {
    if precision == 0 {
        return String::new();
    }
    let scale = 10f64.powi(grid::MAX_PRECISION as i32 - precision as i32);
    let width = precision as usize;
    format!(
        "{:0width$}{:0width$}",
        (easting / scale).round() as u64,
        (northing / scale).round() as u64,
        width = width
    )
}
