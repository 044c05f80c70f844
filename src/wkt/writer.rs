//! WKT writer
//!
//! Canonical output has no space between the keyword and its parenthesis
//! and no space after commas, e.g. `POINT(-0.1278 51.5077)`.

use crate::coordinate::{Coordinate, Geometry};
use crate::utils::format_utils::format_exact;

/// Types that can be written as WKT
pub trait ToWkt {
    fn to_wkt(&self) -> String;
}

impl ToWkt for Coordinate {
    fn to_wkt(&self) -> String {
        let mut out = String::from("POINT(");
        write_position(&mut out, self);
        out.push(')');
        out
    }
}

impl ToWkt for Geometry {
    fn to_wkt(&self) -> String {
        let mut out = String::from(self.geometry_type().keyword());
        match self {
            Geometry::Point(coord) => {
                out.push('(');
                write_position(&mut out, coord);
                out.push(')');
            },
            Geometry::LineString(line) => write_sequence(&mut out, line),
            Geometry::Polygon(rings) => write_polygon(&mut out, rings),
            Geometry::MultiPoint(points) => {
                write_list(&mut out, points, |out, coord| {
                    out.push('(');
                    write_position(out, coord);
                    out.push(')');
                });
            },
            Geometry::MultiLineString(lines) => write_list(&mut out, lines, |out, line| write_sequence(out, line)),
            Geometry::MultiPolygon(polygons) => {
                write_list(&mut out, polygons, |out, rings| write_polygon(out, rings));
            },
        }
        out
    }
}

/// Write a coordinate or geometry as canonical WKT
pub fn to_wkt<T: ToWkt + ?Sized>(value: &T) -> String {
    value.to_wkt()
}

fn write_position(out: &mut String, coord: &Coordinate) {
    out.push_str(&format_exact(coord.lon()));
    out.push(' ');
    out.push_str(&format_exact(coord.lat()));
}

/// `(x y,x y,...)`
fn write_sequence(out: &mut String, coords: &[Coordinate]) {
    write_list(out, coords, write_position);
}

fn write_polygon(out: &mut String, rings: &[Vec<Coordinate>]) {
    write_list(out, rings, |out, ring| write_sequence(out, ring));
}

fn write_list<T, F>(out: &mut String, items: &[T], mut write_item: F)
where
    F: FnMut(&mut String, &T),
{
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_item(out, item);
    }
    out.push(')');
}
