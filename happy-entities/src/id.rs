use std::{fmt, num::ParseIntError, str::FromStr};

/// Opaque identifier of an orphanage as issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrphanageId(i64);

impl OrphanageId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn to_raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for OrphanageId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<OrphanageId> for i64 {
    fn from(from: OrphanageId) -> Self {
        from.0
    }
}

impl FromStr for OrphanageId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for OrphanageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id() {
        assert_eq!(Ok(OrphanageId::new(42)), " 42".parse());
        assert_eq!(Ok(OrphanageId::new(-1)), "-1".parse());
        assert!("".parse::<OrphanageId>().is_err());
        assert!("x1".parse::<OrphanageId>().is_err());
    }

    #[test]
    fn display_id() {
        assert_eq!("7", OrphanageId::from(7).to_string());
    }
}
