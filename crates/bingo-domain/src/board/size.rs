use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::shared::DomainError;

/// Board dimension. Only 3x3 and 5x5 boards exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(u8);

impl BoardSize {
    pub const THREE: BoardSize = BoardSize(3);
    pub const FIVE: BoardSize = BoardSize(5);

    /// Every supported size, smallest first
    pub const ALL: [BoardSize; 2] = [BoardSize::THREE, BoardSize::FIVE];

    pub fn new(dimension: u32) -> Result<Self, DomainError> {
        match dimension {
            3 => Ok(Self::THREE),
            5 => Ok(Self::FIVE),
            other => Err(DomainError::Validation(format!(
                "Unsupported board size {}; expected 3 or 5",
                other
            ))),
        }
    }

    pub fn dimension(&self) -> usize {
        self.0 as usize
    }

    pub fn cell_count(&self) -> usize {
        self.dimension() * self.dimension()
    }

    pub fn center_index(&self) -> usize {
        self.cell_count() / 2
    }

    /// Cells available to user tasks (everything but the center)
    pub fn task_capacity(&self) -> usize {
        self.cell_count() - 1
    }

    /// Maximum number of lines: every row, every column, both diagonals
    pub fn max_lines(&self) -> u32 {
        2 * self.0 as u32 + 2
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::THREE
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

impl TryFrom<u32> for BoardSize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for BoardSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for BoardSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u32::deserialize(deserializer)?;
        BoardSize::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_sizes() {
        assert_eq!(BoardSize::new(3).unwrap(), BoardSize::THREE);
        assert_eq!(BoardSize::new(5).unwrap(), BoardSize::FIVE);
        assert!(BoardSize::new(4).is_err());
        assert!(BoardSize::new(0).is_err());
    }

    #[test]
    fn test_geometry() {
        assert_eq!(BoardSize::THREE.cell_count(), 9);
        assert_eq!(BoardSize::THREE.center_index(), 4);
        assert_eq!(BoardSize::THREE.task_capacity(), 8);
        assert_eq!(BoardSize::FIVE.center_index(), 12);
        assert_eq!(BoardSize::FIVE.max_lines(), 12);
        assert_eq!(BoardSize::FIVE.to_string(), "5x5");
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&BoardSize::FIVE).unwrap(), "5");
        let size: BoardSize = serde_json::from_str("3").unwrap();
        assert_eq!(size, BoardSize::THREE);
        assert!(serde_json::from_str::<BoardSize>("4").is_err());
    }
}
