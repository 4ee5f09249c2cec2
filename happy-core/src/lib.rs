//! # happy-core
//!
//! The orphanages map screen without any UI framework attached:
//! it fetches the orphanages whenever it gains focus, keeps them
//! while it is mounted and turns them into a render model.

pub mod error;
pub mod gateways;
pub mod navigation;
pub mod screen;

pub mod entities {
    pub use happy_entities::{geo::*, id::*, orphanage::*};
}

pub use self::{error::Error, screen::*};

pub type Result<T> = std::result::Result<T, Error>;
