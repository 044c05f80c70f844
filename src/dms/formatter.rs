//! DMS formatting
//!
//! Produces `40° 26′ 46″ N 79° 58′ 56″ W` style strings and the compact
//! copy-paste variant without marks or spaces.

use serde::Serialize;

use crate::coordinate::Coordinate;

/// Most fraction digits the formatter will emit on the seconds field
pub const MAX_FRACTION_DIGITS: usize = 9;

/// Default fraction digits, enough to recover the input within 1e-9 degrees
pub const DEFAULT_FRACTION_DIGITS: usize = 6;

/// Both DMS renderings of a coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DmsStrings {
    /// Human-readable form, e.g. `40° 26′ 46″ N 79° 58′ 56″ W`
    pub with_space: String,
    /// Marks and spaces stripped, e.g. `402646N795856W`
    pub without_space: String,
}

/// Formatter for degrees-minutes-seconds text
#[derive(Debug, Clone, Copy)]
pub struct DmsFormatter {
    fraction_digits: usize,
}

impl Default for DmsFormatter {
    fn default() -> Self {
        DmsFormatter { fraction_digits: DEFAULT_FRACTION_DIGITS }
    }
}

impl DmsFormatter {
    /// Create a formatter keeping up to `fraction_digits` digits on the seconds
    ///
    /// Values above [`MAX_FRACTION_DIGITS`] are clamped.
    pub fn new(fraction_digits: usize) -> Self {
        DmsFormatter { fraction_digits: fraction_digits.min(MAX_FRACTION_DIGITS) }
    }

    /// Format a coordinate, latitude first
    pub fn format(&self, coord: &Coordinate) -> DmsStrings {
        let with_space = format!(
            "{} {}",
            self.format_axis(coord.lat(), 'N', 'S'),
            self.format_axis(coord.lon(), 'E', 'W'),
        );
        let without_space = with_space
            .chars()
            .filter(|c| !matches!(c, '°' | '′' | '″' | ' '))
            .collect();

        DmsStrings { with_space, without_space }
    }

    /// Format one angle as `D° MM′ SS[.s]″ H`
    ///
    /// Rounding happens on an integer count of second fractions so a
    /// carry never produces `60″` or `60′`.
    pub fn format_axis(&self, value: f64, positive: char, negative: char) -> String {
        let scale = 10u64.pow(self.fraction_digits as u32);
        let total = (value.abs() * 3600.0 * scale as f64).round() as u64;
        // A value that rounds to zero keeps the positive hemisphere
        let hemisphere = if value < 0.0 && total > 0 { negative } else { positive };
        let per_minute = 60 * scale;
        let per_degree = 3600 * scale;

        let degrees = total / per_degree;
        let minutes = (total % per_degree) / per_minute;
        let scaled_seconds = total % per_minute;
        let whole_seconds = scaled_seconds / scale;
        let fraction = scaled_seconds % scale;

        let mut seconds = format!("{:02}", whole_seconds);
        if fraction > 0 {
            let digits = format!("{:0width$}", fraction, width = self.fraction_digits);
            seconds.push('.');
            seconds.push_str(digits.trim_end_matches('0'));
        }

        format!("{}° {:02}′ {}″ {}", degrees, minutes, seconds, hemisphere)
    }
}

/// Format a coordinate with the default formatter
pub fn to_dms(coord: &Coordinate) -> DmsStrings {
    DmsFormatter::default().format(coord)
}
