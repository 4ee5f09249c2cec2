use std::fmt;

use crate::entities::OrphanageId;

/// Screens that can be reached from the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    OrphanageDetails { id: OrphanageId },
    SelectMapPosition,
}

impl Destination {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OrphanageDetails { .. } => "OrphanageDetails",
            Self::SelectMapPosition => "SelectMapPosition",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OrphanageDetails { id } => write!(f, "{} {{ id: {id} }}", self.name()),
            Self::SelectMapPosition => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_destinations() {
        assert_eq!(
            "OrphanageDetails { id: 5 }",
            Destination::OrphanageDetails { id: 5.into() }.to_string()
        );
        assert_eq!(
            "SelectMapPosition",
            Destination::SelectMapPosition.to_string()
        );
    }
}
