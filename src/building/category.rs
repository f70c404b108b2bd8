use std::fmt;

use crate::error::ComplianceError;

/// Regulatory use (occupancy) category of a room, `1..=6`.
///
/// Categories 1, 2, 3 and 5 cover rooms where occupants may be unfamiliar
/// with the building or need assistance to evacuate; for these, the required
/// corridor width grows with the number of occupants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UseCategory(u8);

impl UseCategory {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Returns the numeric category code.
    #[must_use]
    pub fn code(self) -> u8 {
        self.0
    }

    /// Whether the required width for this category scales with the
    /// occupant count.
    #[must_use]
    pub fn scales_with_occupancy(self) -> bool {
        matches!(self.0, 1 | 2 | 3 | 5)
    }
}

impl TryFrom<i32> for UseCategory {
    type Error = ComplianceError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match u8::try_from(code) {
            Ok(c) if (Self::MIN..=Self::MAX).contains(&c) => Ok(Self(c)),
            _ => Err(ComplianceError::InvalidCategory(code)),
        }
    }
}

impl fmt::Display for UseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "use category {}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_six() {
        for code in 1..=6_i32 {
            assert_eq!(UseCategory::try_from(code).unwrap().code(), u8::try_from(code).unwrap());
        }
    }

    #[test]
    fn rejects_out_of_range() {
        for code in [0_i32, 7, -1, 300] {
            assert_eq!(
                UseCategory::try_from(code),
                Err(ComplianceError::InvalidCategory(code))
            );
        }
    }

    #[test]
    fn occupancy_scaling_categories() {
        let scaling: Vec<i32> = (1..=6_i32)
            .filter(|c| UseCategory::try_from(*c).unwrap().scales_with_occupancy())
            .collect();
        assert_eq!(scaling, vec![1, 2, 3, 5]);
    }
}
