use std::fmt;

use crate::error::{Error, Result};

/// Rectangular sub-area in degrees, sent upstream as `[N, W, S, E]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub north: f64,
    pub west: f64,
    pub south: f64,
    pub east: f64,
}

impl Area {
    pub const GLOBAL: Area = Area {
        north: 90.0,
        west: -180.0,
        south: -90.0,
        east: 180.0,
    };

    pub fn new(north: f64, west: f64, south: f64, east: f64) -> Self {
        Self {
            north,
            west,
            south,
            east,
        }
    }

    /// Build from the `[N, W, S, E]` order used on the wire.
    pub fn from_nwse(nwse: [f64; 4]) -> Self {
        let [north, west, south, east] = nwse;
        Self::new(north, west, south, east)
    }

    pub fn to_nwse(self) -> [f64; 4] {
        [self.north, self.west, self.south, self.east]
    }

    /// `-180 <= W <= E <= 180` and `-90 <= S <= N <= 90`.
    ///
    /// Areas crossing the antimeridian (W > E) are rejected.
    pub fn validate(&self) -> Result<()> {
        let lon_ok = -180.0 <= self.west && self.west <= self.east && self.east <= 180.0;
        let lat_ok = -90.0 <= self.south && self.south <= self.north && self.north <= 90.0;
        match (lon_ok, lat_ok) {
            (true, true) => Ok(()),
            (false, _) => Err(Error::InvalidArea(format!(
                "{self}: longitudes must satisfy -180 <= west <= east <= 180"
            ))),
            (_, false) => Err(Error::InvalidArea(format!(
                "{self}: latitudes must satisfy -90 <= south <= north <= 90"
            ))),
        }
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::GLOBAL
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.north, self.west, self.south, self.east
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_valid() {
        Area::GLOBAL.validate().unwrap();
        assert_eq!(Area::default(), Area::GLOBAL);
    }

    #[test]
    fn nwse_order() {
        let a = Area::from_nwse([49.0, 8.0, 47.0, 10.0]);
        assert_eq!(a.north, 49.0);
        assert_eq!(a.west, 8.0);
        assert_eq!(a.south, 47.0);
        assert_eq!(a.east, 10.0);
        assert_eq!(a.to_nwse(), [49.0, 8.0, 47.0, 10.0]);
        a.validate().unwrap();
    }

    #[test]
    fn degenerate_area_is_allowed() {
        Area::new(50.0, 15.0, 50.0, 15.0).validate().unwrap();
    }

    #[test]
    fn rejects_swapped_latitudes() {
        let err = Area::new(47.0, 8.0, 49.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArea(m) if m.contains("latitudes")));
    }

    #[test]
    fn rejects_out_of_bounds_longitude() {
        let err = Area::new(10.0, -190.0, 0.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArea(m) if m.contains("longitudes")));
        assert!(Area::new(10.0, 170.0, 0.0, -170.0).validate().is_err());
    }
}
