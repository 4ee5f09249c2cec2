use std::rc::Rc;

use leptos::{ev, *};
use leptos_router::use_navigate;

use happy_core::MapScreen;
use happy_frontend_api::PublicApi;

use crate::{
    components::Map,
    gateways::{ApiGateway, RouterNavigator},
    style,
};

#[component]
pub fn OrphanagesMap(public_api: PublicApi) -> impl IntoView {
    let screen = Rc::new(MapScreen::new(
        ApiGateway::new(public_api),
        RouterNavigator::new(use_navigate()),
    ));

    // -- signals -- //

    let map_view = RwSignal::new(screen.render());
    let markers = Signal::derive(move || map_view.with(|v| v.markers.clone()));
    let footer_label = move || map_view.with(|v| v.footer.label.clone());
    let error = move || map_view.with(|v| v.error.clone());

    // -- callbacks -- //

    let focus = {
        let screen = Rc::clone(&screen);
        move || {
            let screen = Rc::clone(&screen);
            spawn_local(async move {
                let outcome = screen.focus().await;
                log::debug!("Fetched orphanages: {outcome:?}");
                // The signal is gone after unmounting.
                _ = map_view.try_set(screen.render());
            });
        }
    };

    let on_press = Callback::new({
        let screen = Rc::clone(&screen);
        move |destination| screen.press(destination)
    });

    // -- lifecycle -- //

    screen.mount();
    focus();

    let focus_listener = window_event_listener(ev::focus, move |_| focus());
    let blur_listener = window_event_listener(ev::blur, {
        let screen = Rc::clone(&screen);
        move |_| {
            screen.blur();
            _ = map_view.try_set(screen.render());
        }
    });

    on_cleanup({
        let screen = Rc::clone(&screen);
        move || {
            focus_listener.remove();
            blur_listener.remove();
            screen.unmount();
        }
    });

    view! {
      <Map region=screen.initial_region() markers on_press />
      { move || error().map(|error| view! { <p style=style::ERROR_BANNER>{ error }</p> }) }
      <div style=style::FOOTER>
        <span style=style::FOOTER_TEXT>{ footer_label }</span>
        <button
          style=style::CREATE_BUTTON
          on:click=move |_| on_press.call(map_view.with_untracked(|v| v.footer.on_create))
        >
          "+"
        </button>
      </div>
    }
}
