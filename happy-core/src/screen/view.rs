use crate::{
    entities::{MapPoint, MapRegion, Orphanage, OrphanageId},
    navigation::Destination,
    screen::state::{Phase, ScreenState},
};

pub const INITIAL_REGION: MapRegion = MapRegion {
    center: MapPoint::from_lat_lng_deg_unchecked(-23.942_177_6, -46.371_648_3),
    lat_delta: 0.008,
    lng_delta: 0.008,
};

pub const MARKER_ICON: &str = "images/map-marker.png";

/// Position of the callout relative to the marker icon,
/// in multiples of the icon size.
pub const CALLOUT_ANCHOR: Anchor = Anchor { x: 2.8, y: 0.8 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

/// Everything needed to draw the map screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub region: MapRegion,
    pub markers: Vec<MarkerView>,
    pub footer: FooterView,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub key: OrphanageId,
    pub position: MapPoint,
    pub icon: &'static str,
    pub callout_anchor: Anchor,
    pub callout: CalloutView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalloutView {
    pub text: String,
    pub on_press: Destination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub count: usize,
    pub label: String,
    pub on_create: Destination,
}

#[must_use]
pub fn footer_label(count: usize) -> String {
    format!("{count} orfanatos encontrados!")
}

#[must_use]
pub fn render(state: &ScreenState, region: MapRegion) -> MapView {
    let orphanages = state.orphanages();
    MapView {
        region,
        markers: orphanages.iter().map(marker).collect(),
        footer: FooterView {
            count: orphanages.len(),
            label: footer_label(orphanages.len()),
            on_create: Destination::SelectMapPosition,
        },
        error: state.last_error().map(ToString::to_string),
        loading: state.phase() == Phase::Fetching,
    }
}

fn marker(orphanage: &Orphanage) -> MarkerView {
    let Orphanage { id, name, pos } = orphanage;
    MarkerView {
        key: *id,
        position: *pos,
        icon: MARKER_ICON,
        callout_anchor: CALLOUT_ANCHOR,
        callout: CalloutView {
            text: name.clone(),
            on_press: Destination::OrphanageDetails { id: *id },
        },
    }
}
