//! Grid zone designators and 100 km square letters

use super::constants::{grid, letters, utm};
use super::utm::ProjectedPoint;
use crate::errors::{CoordError, CoordResult};

/// The grid zone a reference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridZone {
    /// UTM zone number and latitude band letter
    Utm { zone: u8, band: char },
    /// UPS band letter (A, B, Y or Z)
    Ups { band: char },
}

impl GridZone {
    /// Zone designator as written in a reference (`31U`, `Z`)
    pub fn designator(&self) -> String {
        match self {
            GridZone::Utm { zone, band } => format!("{}{}", zone, band),
            GridZone::Ups { band } => band.to_string(),
        }
    }

    /// Whether the zone lies in the northern hemisphere
    pub fn is_northern(&self) -> bool {
        match self {
            GridZone::Utm { band, .. } => *band >= 'N',
            GridZone::Ups { band } => matches!(band, 'Y' | 'Z'),
        }
    }
}

/// Latitude band letter for a UTM latitude
pub fn band_letter(lat: f64) -> char {
    let index = ((lat - utm::SOUTH_LIMIT) / letters::BAND_HEIGHT).floor();
    let index = index.clamp(0.0, (letters::LATITUDE_BANDS.len() - 1) as f64) as usize;
    letters::LATITUDE_BANDS.as_bytes()[index] as char
}

/// Latitude range `(min, max)` covered by a UTM band letter
pub fn band_latitudes(band: char) -> Option<(f64, f64)> {
    let index = letters::LATITUDE_BANDS.find(band)?;
    let min = utm::SOUTH_LIMIT + index as f64 * letters::BAND_HEIGHT;
    let max = if band == 'X' { utm::NORTH_LIMIT } else { min + letters::BAND_HEIGHT };
    Some((min, max))
}

/// Lowest northing that can carry the given band letter
pub fn band_min_northing(band: char) -> Option<f64> {
    grid::BAND_MIN_NORTHING
        .iter()
        .find(|(letter, _)| *letter == band)
        .map(|(_, northing)| *northing)
}

/// Column letter set of a UTM zone; the sets repeat every three zones
fn utm_columns(zone: u8) -> CoordResult<&'static str> {
    if !(1..=utm::ZONE_COUNT).contains(&zone) {
        return Err(CoordError::InvalidZone(zone.to_string()));
    }
    Ok(letters::UTM_COLUMNS[(zone as usize - 1) % 3])
}

/// Two-letter 100 km square identifier for a UTM position
pub fn utm_square(zone: u8, point: &ProjectedPoint) -> CoordResult<[char; 2]> {
    let column_index = (point.easting / grid::SQUARE_SIZE).floor() as i64;
    let columns = utm_columns(zone)?;
    if !(1..=columns.len() as i64).contains(&column_index) {
        return Err(CoordError::OutOfProjectionDomain(format!(
            "easting {:.0} m outside zone {} grid", point.easting, zone
        )));
    }
    let column = columns.as_bytes()[column_index as usize - 1] as char;

    let row_count = letters::UTM_ROWS.len() as i64;
    let shift = if zone % 2 == 0 { letters::EVEN_ZONE_ROW_SHIFT as i64 } else { 0 };
    let row_index = ((point.northing / grid::SQUARE_SIZE).floor() as i64 + shift).rem_euclid(row_count);
    let row = letters::UTM_ROWS.as_bytes()[row_index as usize] as char;

    Ok([column, row])
}

/// South-west corner of a UTM 100 km square, in metres
///
/// The row letter only fixes the northing modulo 2000 km; the band's
/// minimum northing picks the cycle.
pub fn utm_square_origin(zone: u8, band: char, square: [char; 2]) -> CoordResult<ProjectedPoint> {
    let columns = utm_columns(zone)?;
    let column_index = columns.find(square[0]).ok_or_else(|| {
        CoordError::MalformedGridReference(format!("column letter '{}' not used in zone {}", square[0], zone))
    })?;
    let row_index = letters::UTM_ROWS.find(square[1]).ok_or_else(|| {
        CoordError::MalformedGridReference(format!("row letter '{}' not used in UTM zones", square[1]))
    })?;

    let row_count = letters::UTM_ROWS.len();
    let shift = if zone % 2 == 0 { letters::EVEN_ZONE_ROW_SHIFT } else { 0 };
    let row = (row_index + row_count - shift) % row_count;

    let easting = (column_index as f64 + 1.0) * grid::SQUARE_SIZE;
    let min_northing = band_min_northing(band).ok_or(CoordError::InvalidBandLetter(band))?;
    let mut northing = row as f64 * grid::SQUARE_SIZE;
    while northing < min_northing {
        northing += grid::ROW_CYCLE;
    }

    Ok(ProjectedPoint::new(easting, northing))
}

/// Index into the UPS tables for a band letter
fn ups_band_index(band: char) -> Option<usize> {
    letters::UPS_BANDS.iter().position(|&b| b == band)
}

fn ups_rows(northern: bool) -> (&'static str, u32) {
    if northern {
        (letters::UPS_ROWS_NORTH, letters::UPS_ROW_ORIGIN_NORTH)
    } else {
        (letters::UPS_ROWS_SOUTH, letters::UPS_ROW_ORIGIN_SOUTH)
    }
}

/// UPS band letter and 100 km square letters for a polar position
pub fn ups_square(northern: bool, point: &ProjectedPoint) -> CoordResult<(char, [char; 2])> {
    let out_of_grid = || CoordError::OutOfProjectionDomain(format!(
        "polar position ({:.0}, {:.0}) outside the UPS grid", point.easting, point.northing
    ));

    let column = (point.easting / grid::SQUARE_SIZE).floor() as i64;
    let row = (point.northing / grid::SQUARE_SIZE).floor() as i64;
    if column < 0 || row < 0 {
        return Err(out_of_grid());
    }

    let eastern = column as u32 >= letters::UPS_COLUMN_ORIGIN[1];
    let band_index = (if northern { 2 } else { 0 }) + usize::from(eastern);
    let band = letters::UPS_BANDS[band_index];

    let columns = letters::UPS_COLUMNS[band_index];
    let column_letter = (column as u32)
        .checked_sub(letters::UPS_COLUMN_ORIGIN[band_index])
        .and_then(|i| columns.as_bytes().get(i as usize))
        .ok_or_else(out_of_grid)?;

    let (rows, row_origin) = ups_rows(northern);
    let row_letter = (row as u32)
        .checked_sub(row_origin)
        .and_then(|i| rows.as_bytes().get(i as usize))
        .ok_or_else(out_of_grid)?;

    Ok((band, [*column_letter as char, *row_letter as char]))
}

/// South-west corner of a UPS 100 km square, in metres
pub fn ups_square_origin(band: char, square: [char; 2]) -> CoordResult<ProjectedPoint> {
    let band_index = ups_band_index(band).ok_or(CoordError::InvalidBandLetter(band))?;
    let northern = band_index >= 2;

    let column_index = letters::UPS_COLUMNS[band_index].find(square[0]).ok_or_else(|| {
        CoordError::MalformedGridReference(format!("column letter '{}' not used in UPS band {}", square[0], band))
    })?;
    let (rows, row_origin) = ups_rows(northern);
    let row_index = rows.find(square[1]).ok_or_else(|| {
        CoordError::MalformedGridReference(format!("row letter '{}' not used in UPS band {}", square[1], band))
    })?;

    let easting = (letters::UPS_COLUMN_ORIGIN[band_index] + column_index as u32) as f64 * grid::SQUARE_SIZE;
    let northing = (row_origin + row_index as u32) as f64 * grid::SQUARE_SIZE;

    Ok(ProjectedPoint::new(easting, northing))
}
