use std::fmt;

use image::Rgb;

use crate::error::GenError;

/// The two placeholder zone kinds the map knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneType {
    /// "M", drawn lightpink
    Residential,
    /// "C", drawn lightcyan
    Commercial,
}

impl ZoneType {
    pub const ALL: [ZoneType; 2] = [ZoneType::Residential, ZoneType::Commercial];

    pub fn code(self) -> char {
        return match self {
            ZoneType::Residential => 'M',
            ZoneType::Commercial => 'C',
        };
    }

    pub fn fill(self) -> Rgb<u8> {
        // css lightpink / lightcyan
        return match self {
            ZoneType::Residential => Rgb([255, 182, 193]),
            ZoneType::Commercial => Rgb([224, 255, 255]),
        };
    }

    pub fn from_code(code: &str) -> Result<ZoneType, GenError> {
        return match code {
            "M" => Ok(ZoneType::Residential),
            "C" => Ok(ZoneType::Commercial),
            other => Err(GenError::InvalidZoneType(other.to_string())),
        };
    }
}

/// Identifier of one zone cell. Doubles as the on-image label and the
/// output file name stem, e.g. `M_Z11` for the residential zone at
/// row 0, col 0 (the label is 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId {
    pub zone: ZoneType,
    pub row: u32,
    pub col: u32,
}

impl ZoneId {
    pub fn new(zone: ZoneType, row: u32, col: u32) -> Self {
        return ZoneId { zone, row, col };
    }

    pub fn file_name(&self) -> String {
        return format!("{self}.png");
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}_Z{}{}", self.zone.code(), self.row + 1, self.col + 1);
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::{Area, Grid};

    #[test]
    fn id_label_is_one_based() {
        assert_eq!(ZoneId::new(ZoneType::Residential, 0, 0).to_string(), "M_Z11");
        assert_eq!(ZoneId::new(ZoneType::Commercial, 2, 3).to_string(), "C_Z34");
        assert_eq!(ZoneId::new(ZoneType::Residential, 6, 7).to_string(), "M_Z78");
    }

    #[test]
    fn file_name_has_png_ext() {
        let id = ZoneId::new(ZoneType::Commercial, 0, 4);
        assert_eq!(id.file_name(), "C_Z15.png");
    }

    #[test]
    fn from_code_roundtrips() {
        for zone in ZoneType::ALL {
            let parsed = ZoneType::from_code(&zone.code().to_string()).unwrap();
            assert_eq!(parsed, zone);
        }
    }

    #[test]
    fn from_code_rejects_unknown() {
        let err = ZoneType::from_code("X").unwrap_err();
        assert!(matches!(
            err,
            crate::error::GenError::InvalidZoneType(ref code) if code.as_str() == "X"
        ));
    }

    #[test]
    fn fills_are_distinct() {
        assert_ne!(
            ZoneType::Residential.fill(),
            ZoneType::Commercial.fill()
        );
    }

    #[test]
    fn file_names_unique_over_default_grid() {
        let grid = Grid::new(8, 7);
        let mut names = HashSet::new();
        for loc in grid.iter_locs() {
            for zone in ZoneType::ALL {
                names.insert(ZoneId::new(zone, loc.y, loc.x).file_name());
            }
        }
        assert_eq!(names.len(), (grid.area() * 2) as usize);
        assert_eq!(names.len(), 112);
    }
}
