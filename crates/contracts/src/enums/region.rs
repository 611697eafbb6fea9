use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
}

impl Region {
    /// Wire code, identical to the label shown in the UI
    pub fn code(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    /// All known regions
    pub fn all() -> Vec<Region> {
        vec![Region::North, Region::South, Region::East]
    }

    /// Parse from a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "North" => Some(Region::North),
            "South" => Some(Region::South),
            "East" => Some(Region::East),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for region in Region::all() {
            assert_eq!(Region::from_code(region.code()), Some(region));
        }
        assert_eq!(Region::from_code("West"), None);
        assert_eq!(Region::from_code("north"), None);
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Region::South).unwrap();
        assert_eq!(json, "\"South\"");
    }
}
