use leaflet::{LatLng, LatLngBounds};
use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, Popup, Position, TileLayer};

use happy_core::{entities::MapRegion, navigation::Destination, MarkerView};

use crate::style;

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const MAX_ZOOM: f64 = 19.0;
const MARKER_ICON_SIZE: (f64, f64) = (58.0, 68.0);

#[component]
pub fn Map(
    region: MapRegion,
    markers: Signal<Vec<MarkerView>>,
    on_press: Callback<Destination>,
) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    Effect::new(move |_| {
        let Some(map) = map.get() else {
            return;
        };
        let (sw, ne) = region.corners();
        let bounds = LatLngBounds::new(
            &LatLng::new(sw.lat, sw.lng),
            &LatLng::new(ne.lat, ne.lng),
        );
        log::debug!("Fit leaflet map to {sw} - {ne}");
        map.fit_bounds(&bounds);
    });

    let MapRegion { center, .. } = region;
    let center = Position::new(center.lat, center.lng);
    let zoom = zoom_level(&region);

    view! {
      <div style=style::MAP>
        <MapContainer
          class="happy-map"
          center
          zoom
          map=map.write_only()
          set_view=true
        >
          <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
          <For
            each=move || markers.get()
            key=|marker| marker.key
            let:marker
          >
            <Marker
              position=position!(marker.position.lat, marker.position.lng)
              icon_url=Some(marker.icon.to_string())
              icon_size=Some(MARKER_ICON_SIZE)
            >
              <Popup>
                <button
                  style=format!("{} {}", style::CALLOUT_CONTAINER, style::callout_offset(marker.callout_anchor))
                  on:click=move |_| on_press.call(marker.callout.on_press)
                >
                  <span style=style::CALLOUT_TEXT>{ marker.callout.text.clone() }</span>
                </button>
              </Popup>
            </Marker>
          </For>
        </MapContainer>
      </div>
    }
}

/// Leaflet zoom level that shows the longitude span of the region.
fn zoom_level(region: &MapRegion) -> f64 {
    (360.0 / region.lng_delta).log2().floor().clamp(0.0, MAX_ZOOM)
}
