use crate::{geo::MapPoint, id::OrphanageId};

/// An orphanage as it appears on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Orphanage {
    pub id: OrphanageId,
    pub name: String,
    pub pos: MapPoint,
}
