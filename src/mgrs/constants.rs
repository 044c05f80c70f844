//! MGRS and projection constants
//!
//! This module collects the ellipsoid parameters, projection defaults and
//! grid lettering tables used by the UTM/UPS codec, so none of them appear
//! as magic numbers in the math.

/// WGS84 ellipsoid
pub mod wgs84 {
    /// Semi-major axis in metres
    pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
    /// Flattening
    pub const FLATTENING: f64 = 1.0 / 298.257_223_563;
}

/// Universal Transverse Mercator parameters
pub mod utm {
    pub const SCALE_FACTOR: f64 = 0.9996;
    pub const FALSE_EASTING: f64 = 500_000.0;
    /// Added to northings in the southern hemisphere
    pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;
    pub const ZONE_WIDTH: f64 = 6.0;
    pub const ZONE_COUNT: u8 = 60;
    /// UPS takes over at and above this latitude
    pub const NORTH_LIMIT: f64 = 84.0;
    /// UPS takes over at and below this latitude
    pub const SOUTH_LIMIT: f64 = -80.0;
}

/// Universal Polar Stereographic parameters
pub mod ups {
    pub const SCALE_FACTOR: f64 = 0.994;
    pub const FALSE_EASTING: f64 = 2_000_000.0;
    pub const FALSE_NORTHING: f64 = 2_000_000.0;
}

/// Grid lettering
pub mod letters {
    /// UTM latitude bands, 8 degrees each from -80 (X spans 12)
    pub const LATITUDE_BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";
    pub const BAND_HEIGHT: f64 = 8.0;

    /// UTM 100 km column letters, selected by `(zone - 1) % 3`
    pub const UTM_COLUMNS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];
    /// UTM 100 km row letters; even zones start at F
    pub const UTM_ROWS: &str = "ABCDEFGHJKLMNPQRSTUV";
    pub const EVEN_ZONE_ROW_SHIFT: usize = 5;

    /// UPS bands: south-west, south-east, north-west, north-east
    pub const UPS_BANDS: [char; 4] = ['A', 'B', 'Y', 'Z'];
    /// UPS column letters, indexed like `UPS_BANDS`
    pub const UPS_COLUMNS: [&str; 4] = ["JKLPQRSTUXYZ", "ABCFGHJKLPQR", "RSTUXYZ", "ABCFGHJ"];
    /// 100 km index of the first column, indexed like `UPS_BANDS`
    pub const UPS_COLUMN_ORIGIN: [u32; 4] = [8, 20, 13, 20];
    pub const UPS_ROWS_SOUTH: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
    pub const UPS_ROWS_NORTH: &str = "ABCDEFGHJKLMNP";
    pub const UPS_ROW_ORIGIN_SOUTH: u32 = 8;
    pub const UPS_ROW_ORIGIN_NORTH: u32 = 13;
}

/// Grid square geometry
pub mod grid {
    /// Side of a lettered grid square in metres
    pub const SQUARE_SIZE: f64 = 100_000.0;
    /// Northing period after which UTM row letters repeat
    pub const ROW_CYCLE: f64 = 2_000_000.0;
    pub const MAX_PRECISION: u8 = 5;
    pub const DEFAULT_PRECISION: u8 = 5;

    /// Lowest UTM northing (rounded down to 100 km) inside each latitude band
    pub const BAND_MIN_NORTHING: [(char, f64); 20] = [
        ('C', 1_100_000.0), ('D', 2_000_000.0), ('E', 2_800_000.0), ('F', 3_700_000.0),
        ('G', 4_600_000.0), ('H', 5_500_000.0), ('J', 6_400_000.0), ('K', 7_300_000.0),
        ('L', 8_200_000.0), ('M', 9_100_000.0), ('N', 0.0), ('P', 800_000.0),
        ('Q', 1_700_000.0), ('R', 2_600_000.0), ('S', 3_500_000.0), ('T', 4_400_000.0),
        ('U', 5_300_000.0), ('V', 6_200_000.0), ('W', 7_000_000.0), ('X', 7_900_000.0),
    ];
}
