use happy_core::navigation::Destination;

mod external;
mod orphanages_map;

pub use self::{external::*, orphanages_map::*};

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    OrphanagesMap,
    OrphanageDetails,
    SelectMapPosition,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::OrphanagesMap => "/",
            Self::OrphanageDetails => "/orphanages/:id",
            Self::SelectMapPosition => "/orphanages/create/position",
        }
    }
}

pub fn destination_path(destination: Destination) -> String {
    match destination {
        Destination::OrphanageDetails { id } => format!("/orphanages/{id}"),
        Destination::SelectMapPosition => Page::SelectMapPosition.path().to_string(),
    }
}
