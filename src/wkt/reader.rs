//! WKT reader
//!
//! Recursive-descent parser over [`WktToken`]s for the six supported
//! geometry types.

use log::debug;

use super::tokenizer::{tokenize, WktToken};
use crate::coordinate::{Coordinate, Geometry, GeometryType};
use crate::errors::{CoordError, CoordResult};

/// Minimum positions in a closed polygon ring
const MIN_RING_LENGTH: usize = 4;
/// Minimum positions in a line string
const MIN_LINE_LENGTH: usize = 2;

/// Parse WKT text into a geometry
///
/// # Arguments
/// * `input` - Text such as `POINT(-0.1278 51.5077)`; keywords are
///   case-insensitive and whitespace is free
///
/// # Returns
/// The geometry, `UnsupportedGeometryType` for other keywords, or
/// `MalformedWkt` when the text breaks the grammar
pub fn parse_wkt(input: &str) -> CoordResult<Geometry> {
    let mut reader = WktReader::new(tokenize(input)?);
    let geometry = reader.read_geometry()?;
    reader.expect_end()?;

    debug!("Parsed {} with {} positions", geometry.geometry_type().keyword(), geometry.vertex_count());
    Ok(geometry)
}

struct WktReader {
    tokens: Vec<WktToken>,
    pos: usize,
}

impl WktReader {
    fn new(tokens: Vec<WktToken>) -> Self {
        WktReader { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&WktToken> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<WktToken> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn read_geometry(&mut self) -> CoordResult<Geometry> {
        let keyword = match self.next() {
            Some(WktToken::Word(word)) => word,
            Some(other) => return Err(malformed(format!("expected a geometry keyword, found {:?}", other))),
            None => return Err(malformed("empty input".to_string())),
        };
        let geometry_type = GeometryType::from_keyword(&keyword)
            .ok_or_else(|| CoordError::UnsupportedGeometryType(keyword.to_uppercase()))?;

        if let Some(WktToken::Word(word)) = self.peek() {
            let word = word.to_uppercase();
            return Err(match word.as_str() {
                "EMPTY" => malformed(format!("{} EMPTY has no coordinates", geometry_type.keyword())),
                "Z" | "M" | "ZM" => malformed(format!("{} dimension is not supported", word)),
                _ => malformed(format!("unexpected word '{}'", word)),
            });
        }

        Ok(match geometry_type {
            GeometryType::Point => {
                self.expect(WktToken::LeftParen)?;
                let coord = self.read_coordinate()?;
                self.expect(WktToken::RightParen)?;
                Geometry::Point(coord)
            },
            GeometryType::LineString => Geometry::LineString(self.read_line()?),
            GeometryType::Polygon => Geometry::Polygon(self.read_polygon()?),
            GeometryType::MultiPoint => Geometry::MultiPoint(self.read_multi_point()?),
            GeometryType::MultiLineString => {
                Geometry::MultiLineString(self.read_list(|r| r.read_line())?)
            },
            GeometryType::MultiPolygon => Geometry::MultiPolygon(self.read_list(|r| r.read_polygon())?),
        })
    }

    /// `( item {, item} )`
    fn read_list<T, F>(&mut self, mut read_item: F) -> CoordResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> CoordResult<T>,
    {
        self.expect(WktToken::LeftParen)?;
        let mut items = vec![read_item(self)?];
        loop {
            match self.next() {
                Some(WktToken::Comma) => items.push(read_item(self)?),
                Some(WktToken::RightParen) => return Ok(items),
                Some(other) => return Err(malformed(format!("expected ',' or ')', found {:?}", other))),
                None => return Err(malformed("unbalanced parentheses".to_string())),
            }
        }
    }

    fn read_line(&mut self) -> CoordResult<Vec<Coordinate>> {
        let line = self.read_list(|r| r.read_coordinate())?;
        if line.len() < MIN_LINE_LENGTH {
            return Err(malformed(format!("line needs at least {} positions", MIN_LINE_LENGTH)));
        }
        Ok(line)
    }

    fn read_ring(&mut self) -> CoordResult<Vec<Coordinate>> {
        let ring = self.read_list(|r| r.read_coordinate())?;
        if ring.len() < MIN_RING_LENGTH {
            return Err(malformed(format!("ring needs at least {} positions", MIN_RING_LENGTH)));
        }
        if ring.first() != ring.last() {
            return Err(malformed("ring is not closed".to_string()));
        }
        Ok(ring)
    }

    fn read_polygon(&mut self) -> CoordResult<Vec<Vec<Coordinate>>> {
        self.read_list(|r| r.read_ring())
    }

    /// Points may be bare (`1 2, 3 4`) or wrapped (`(1 2), (3 4)`)
    fn read_multi_point(&mut self) -> CoordResult<Vec<Coordinate>> {
        self.read_list(|r| {
            if r.peek() == Some(&WktToken::LeftParen) {
                r.expect(WktToken::LeftParen)?;
                let coord = r.read_coordinate()?;
                r.expect(WktToken::RightParen)?;
                Ok(coord)
            } else {
                r.read_coordinate()
            }
        })
    }

    fn read_coordinate(&mut self) -> CoordResult<Coordinate> {
        let lon = self.read_number()?;
        let lat = self.read_number()?;
        if let Some(WktToken::Number(_)) = self.peek() {
            return Err(malformed("only two-dimensional positions are supported".to_string()));
        }
        Coordinate::new(lon, lat)
    }

    fn read_number(&mut self) -> CoordResult<f64> {
        match self.next() {
            Some(WktToken::Number(value)) => Ok(value),
            Some(other) => Err(malformed(format!("expected a number, found {:?}", other))),
            None => Err(malformed("unexpected end of input".to_string())),
        }
    }

    fn expect(&mut self, expected: WktToken) -> CoordResult<()> {
        match self.next() {
            Some(ref token) if *token == expected => Ok(()),
            Some(other) => Err(malformed(format!("expected {:?}, found {:?}", expected, other))),
            None => Err(malformed(format!("expected {:?}, found end of input", expected))),
        }
    }

    fn expect_end(&self) -> CoordResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(malformed(format!("trailing {:?} after geometry", token))),
        }
    }
}

fn malformed(msg: String) -> CoordError {
    CoordError::MalformedWkt(msg)
}
