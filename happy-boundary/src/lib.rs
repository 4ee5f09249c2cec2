use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::conv::InvalidOrphanage;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Orphanage {
    pub id        : i64,
    pub name      : String,
    pub latitude  : f64,
    pub longitude : f64,
}

/// Error response body of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (HTTP {http_status})")]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
