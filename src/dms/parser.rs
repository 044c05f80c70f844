//! Free-form DMS and decimal-degree parser
//!
//! Reduces the token stream from [`tokenize`] to exactly two angle groups
//! and resolves which one is latitude.

use log::debug;

use super::tokenizer::{tokenize, Hemisphere, Sign, Token, Unit};
use crate::coordinate::Coordinate;
use crate::errors::{CoordError, CoordResult};

/// One number inside an angle group
#[derive(Debug, Clone)]
struct Component {
    text: String,
    unit: Option<Unit>,
}

impl Component {
    fn has_fraction(&self) -> bool {
        self.text.contains('.')
    }

    fn integer_digits(&self) -> usize {
        self.text.split('.').next().map_or(0, str::len)
    }

    fn value(&self) -> CoordResult<f64> {
        self.text.parse::<f64>()
            .map_err(|_| malformed(format!("'{}' is not a number", self.text)))
    }
}

/// Numbers that together describe one angle
#[derive(Debug, Clone)]
struct AngleGroup {
    components: Vec<Component>,
    sign: Sign,
    hemisphere: Option<Hemisphere>,
}

impl AngleGroup {
    fn new() -> Self {
        AngleGroup { components: Vec::new(), sign: Sign::Unsigned, hemisphere: None }
    }

    fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn push_number(&mut self, text: String, sign: Sign) -> CoordResult<()> {
        if sign != Sign::Unsigned {
            if !self.is_empty() {
                return Err(malformed("sign inside an angle".to_string()));
            }
            self.sign = sign;
        }
        if self.components.len() == 3 {
            return Err(malformed("more than three numbers in one angle".to_string()));
        }
        self.components.push(Component { text, unit: None });
        Ok(())
    }

    fn mark_unit(&mut self, unit: Unit) -> CoordResult<()> {
        match self.components.last_mut() {
            Some(last) if last.unit.is_none() => {
                last.unit = Some(unit);
                Ok(())
            },
            _ => Err(malformed("unit mark without a preceding number".to_string())),
        }
    }

    /// Signed decimal degrees of this group
    fn to_degrees(&self) -> CoordResult<f64> {
        let [degrees, minutes, seconds] = self.parts()?;

        if !(0.0..60.0).contains(&minutes) {
            return Err(malformed(format!("minutes out of range: {}", minutes)));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(malformed(format!("seconds out of range: {}", seconds)));
        }

        let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;

        let negative = match (self.sign, self.hemisphere) {
            (Sign::Minus, Some(h)) if !h.is_negative() => {
                return Err(malformed(format!("minus sign conflicts with hemisphere {:?}", h)));
            },
            (Sign::Plus, Some(h)) if h.is_negative() => {
                return Err(malformed(format!("plus sign conflicts with hemisphere {:?}", h)));
            },
            (Sign::Minus, _) => true,
            (_, Some(h)) => h.is_negative(),
            _ => false,
        };

        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Degrees, minutes and seconds, each defaulting to zero
    fn parts(&self) -> CoordResult<[f64; 3]> {
        if let Some(packed) = self.packed_parts()? {
            return Ok(packed);
        }

        let mut parts = [0.0; 3];
        let mut next_slot = 0;
        let last = self.components.len().saturating_sub(1);

        for (i, component) in self.components.iter().enumerate() {
            let slot = match component.unit {
                Some(Unit::Degrees) => 0,
                Some(Unit::Minutes) => 1,
                Some(Unit::Seconds) => 2,
                None => next_slot,
            };
            if slot < next_slot || slot > 2 {
                return Err(malformed("units out of degree/minute/second order".to_string()));
            }
            if i != last && component.has_fraction() {
                return Err(malformed("only the last number of an angle may have a fraction".to_string()));
            }
            parts[slot] = component.value()?;
            next_slot = slot + 1;
        }

        Ok(parts)
    }

    /// Compact `[D]DDMMSS[.s]` form, only recognised next to a hemisphere letter
    fn packed_parts(&self) -> CoordResult<Option<[f64; 3]>> {
        let component = match self.components.as_slice() {
            [only] if only.unit.is_none() && self.hemisphere.is_some() && only.integer_digits() >= 5 => only,
            _ => return Ok(None),
        };

        let split = component.integer_digits() - 4;
        let (degrees, rest) = component.text.split_at(split);
        let (minutes, seconds) = rest.split_at(2);
        let parse = |s: &str| s.parse::<f64>().map_err(|_| malformed(format!("'{}' is not a number", component.text)));

        Ok(Some([parse(degrees)?, parse(minutes)?, parse(seconds)?]))
    }
}

/// Parse a free-form coordinate string
///
/// Accepts degrees-minutes-seconds and decimal degrees, hemisphere letters
/// before or after each angle, and either axis order. Without letters the
/// first angle is latitude.
///
/// # Arguments
/// * `input` - Text such as `40°26'46"N 79°58'56"W` or `40.4461, -79.9822`
///
/// # Returns
/// The coordinate, or `MalformedCoordinateString`
pub fn parse_freeform(input: &str) -> CoordResult<Coordinate> {
    let tokens = tokenize(input)?;
    let groups = group_tokens(&tokens)?;

    let (first, second) = match groups.as_slice() {
        [first, second] => (first, second),
        _ => return Err(malformed(format!("expected two angles, found {}", groups.len()))),
    };

    let first_is_lat = match (first.hemisphere, second.hemisphere) {
        (Some(a), Some(b)) if a.is_latitude() == b.is_latitude() => {
            return Err(malformed("both angles name the same axis".to_string()));
        },
        (Some(a), _) => a.is_latitude(),
        (None, Some(b)) => !b.is_latitude(),
        (None, None) => true,
    };

    let (lat_group, lon_group) = if first_is_lat { (first, second) } else { (second, first) };
    let lat = lat_group.to_degrees()?;
    let lon = lon_group.to_degrees()?;

    if lat.abs() > 90.0 {
        return Err(malformed(format!("latitude {} exceeds 90 degrees", lat)));
    }
    if lon.abs() > 180.0 {
        return Err(malformed(format!("longitude {} exceeds 180 degrees", lon)));
    }

    debug!("Parsed free-form coordinate '{}' as lon={}, lat={}", input.trim(), lon, lat);
    Coordinate::new(lon, lat)
}

/// Group tokens into angle groups
fn group_tokens(tokens: &[Token]) -> CoordResult<Vec<AngleGroup>> {
    if let Some(groups) = split_bare_numbers(tokens)? {
        return Ok(groups);
    }

    let prefix_mode = matches!(
        tokens.iter().find(|t| !matches!(t, Token::Separator)),
        Some(Token::Hemisphere(_))
    );

    let mut groups = Vec::new();
    let mut current = AngleGroup::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Hemisphere(h) if prefix_mode => {
                if !current.is_empty() {
                    groups.push(std::mem::replace(&mut current, AngleGroup::new()));
                } else if current.hemisphere.is_some() {
                    return Err(malformed("hemisphere letter without a value".to_string()));
                }
                current.hemisphere = Some(*h);
            },
            Token::Hemisphere(h) => {
                if current.is_empty() {
                    return Err(malformed("hemisphere letter without a value".to_string()));
                }
                current.hemisphere = Some(*h);
                groups.push(std::mem::replace(&mut current, AngleGroup::new()));
            },
            Token::Separator => {
                if !current.is_empty() {
                    groups.push(std::mem::replace(&mut current, AngleGroup::new()));
                } else if current.hemisphere.is_some() {
                    return Err(malformed("hemisphere letter without a value".to_string()));
                }
            },
            Token::Unit(unit) => current.mark_unit(*unit)?,
            Token::Number { text, sign } => {
                let degree_follows = matches!(tokens.get(i + 1), Some(Token::Unit(Unit::Degrees)));
                let starts_angle = !current.is_empty()
                    && (*sign != Sign::Unsigned || degree_follows || current.components.len() == 3);
                if starts_angle {
                    groups.push(std::mem::replace(&mut current, AngleGroup::new()));
                }
                current.push_number(text.clone(), *sign)?;
            },
        }
    }

    if !current.is_empty() {
        groups.push(current);
    } else if current.hemisphere.is_some() {
        return Err(malformed("hemisphere letter without a value".to_string()));
    }

    Ok(groups)
}

/// Split a plain run of 2, 4 or 6 numbers down the middle
fn split_bare_numbers(tokens: &[Token]) -> CoordResult<Option<Vec<AngleGroup>>> {
    let all_numbers = tokens.iter().all(|t| matches!(t, Token::Number { .. }));
    if !all_numbers || !matches!(tokens.len(), 2 | 4 | 6) {
        return Ok(None);
    }

    let mut groups = Vec::with_capacity(2);
    for half in tokens.chunks(tokens.len() / 2) {
        let mut group = AngleGroup::new();
        for token in half {
            if let Token::Number { text, sign } = token {
                group.push_number(text.clone(), *sign)?;
            }
        }
        groups.push(group);
    }
    Ok(Some(groups))
}

fn malformed(msg: String) -> CoordError {
    CoordError::MalformedCoordinateString(msg)
}
