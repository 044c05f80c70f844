//! Geometry variants read from and written to WKT

use super::bbox::BoundingBox;
use super::point::Coordinate;

/// Kind of a [`Geometry`], mainly for display and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryType {
    /// The upper-case WKT keyword for this type
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
        }
    }

    /// Look up a type by WKT keyword, ignoring case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "POINT" => Some(GeometryType::Point),
            "LINESTRING" => Some(GeometryType::LineString),
            "POLYGON" => Some(GeometryType::Polygon),
            "MULTIPOINT" => Some(GeometryType::MultiPoint),
            "MULTILINESTRING" => Some(GeometryType::MultiLineString),
            "MULTIPOLYGON" => Some(GeometryType::MultiPolygon),
            _ => None,
        }
    }
}

/// A point or shape in WGS84 longitude/latitude
///
/// Polygon rings are closed (first position equals last). The WKT reader
/// guarantees this for parsed geometries.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    /// Rings; the first is the exterior
    Polygon(Vec<Vec<Coordinate>>),
    MultiPoint(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    MultiPolygon(Vec<Vec<Vec<Coordinate>>>),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    /// All coordinates in traversal order
    pub fn coordinates(&self) -> Box<dyn Iterator<Item = &Coordinate> + '_> {
        match self {
            Geometry::Point(c) => Box::new(std::iter::once(c)),
            Geometry::LineString(coords) | Geometry::MultiPoint(coords) => Box::new(coords.iter()),
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => {
                Box::new(rings.iter().flatten())
            },
            Geometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten().flatten()),
        }
    }

    /// First coordinate in traversal order
    ///
    /// For a Polygon this is the first vertex of the exterior ring, for the
    /// Multi* types the first position of the first component.
    pub fn first_coordinate(&self) -> Option<Coordinate> {
        self.coordinates().next().copied()
    }

    /// Component-wise min/max over every contained coordinate
    pub fn extent(&self) -> Option<BoundingBox> {
        BoundingBox::from_coordinates(self.coordinates())
    }

    /// Number of positions in the geometry
    pub fn vertex_count(&self) -> usize {
        self.coordinates().count()
    }
}

impl From<Coordinate> for Geometry {
    fn from(coord: Coordinate) -> Self {
        Geometry::Point(coord)
    }
}

impl From<&Coordinate> for Geometry {
    fn from(coord: &Coordinate) -> Self {
        Geometry::Point(*coord)
    }
}
