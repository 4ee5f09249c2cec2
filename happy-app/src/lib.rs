use leptos::*;
use leptos_router::*;

use happy_frontend_api as api;

mod components;
mod gateways;
mod pages;
mod style;

use self::pages::*;

const DEFAULT_API_URL: &str = "/api";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let public_api = api::PublicApi::new(DEFAULT_API_URL.to_string());

    view! {
      <Router>
        <main style=style::CONTAINER>
          <Routes>
            <Route
              path=Page::OrphanagesMap.path()
              view=move || view! { <OrphanagesMap public_api = public_api.clone() /> }
            />
            <Route
              path=Page::OrphanageDetails.path()
              view=OrphanageDetails
            />
            <Route
              path=Page::SelectMapPosition.path()
              view=SelectMapPosition
            />
          </Routes>
        </main>
      </Router>
    }
}
