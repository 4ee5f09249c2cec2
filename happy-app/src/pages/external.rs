use leptos::*;
use leptos_router::*;

use crate::{style, Page};

// The destinations reached from the map are provided by other
// parts of the application; these pages only mark the route.

#[component]
pub fn OrphanageDetails() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    view! {
      <section style=style::PAGE>
        <h1 style=style::PAGE_TITLE>"Orfanato #" { id }</h1>
        <A href=Page::OrphanagesMap.path()>"Voltar para o mapa"</A>
      </section>
    }
}

#[component]
pub fn SelectMapPosition() -> impl IntoView {
    view! {
      <section style=style::PAGE>
        <h1 style=style::PAGE_TITLE>"Selecione a localização no mapa"</h1>
        <A href=Page::OrphanagesMap.path()>"Voltar para o mapa"</A>
      </section>
    }
}
