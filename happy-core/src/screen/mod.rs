use std::cell::{Ref, RefCell};

use futures::future::{abortable, AbortHandle, Aborted};

use crate::{
    entities::{MapRegion, OrphanageId},
    gateways::{Navigator, OrphanageGateway},
    navigation::Destination,
};

mod state;
mod view;


pub use self::{state::*, view::*};

/// The orphanages map.
///
/// The screen must be mounted before it can be focused.
/// Every focus issues a new request; only the response of the most
/// recent request is applied and older requests are aborted.
/// Blurring or unmounting the screen aborts the pending request.
pub struct MapScreen<G, N> {
    gateway: G,
    navigator: N,
    region: MapRegion,
    state: RefCell<ScreenState>,
    in_flight: RefCell<Option<(RequestSeq, AbortHandle)>>,
}

impl<G, N> MapScreen<G, N>
where
    G: OrphanageGateway,
    N: Navigator,
{
    pub fn new(gateway: G, navigator: N) -> Self {
        Self {
            gateway,
            navigator,
            region: INITIAL_REGION,
            state: RefCell::new(ScreenState::default()),
            in_flight: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn with_initial_region(mut self, region: MapRegion) -> Self {
        debug_assert!(region.is_valid());
        self.region = region;
        self
    }

    pub const fn initial_region(&self) -> MapRegion {
        self.region
    }

    pub fn state(&self) -> Ref<'_, ScreenState> {
        self.state.borrow()
    }

    pub fn mount(&self) {
        self.state.borrow_mut().mount();
    }

    /// Fetch the orphanages and wait for the response.
    pub async fn focus(&self) -> FetchOutcome {
        let Some(seq) = self.state.borrow_mut().begin_fetch() else {
            return FetchOutcome::Cancelled;
        };
        let (request, abort_handle) = abortable(self.gateway.list_orphanages());
        if let Some((previous, handle)) = self.in_flight.replace(Some((seq, abort_handle))) {
            log::debug!("Abort request #{}", previous.to_raw());
            handle.abort();
        }
        let result = request.await;
        self.finish_in_flight(seq);
        match result {
            Ok(result) => self.state.borrow_mut().complete_fetch(seq, result),
            Err(Aborted) => {
                log::debug!("Request #{} has been aborted", seq.to_raw());
                FetchOutcome::Cancelled
            }
        }
    }

    pub fn blur(&self) {
        self.state.borrow_mut().blur();
        self.abort_in_flight();
    }

    pub fn unmount(&self) {
        self.state.borrow_mut().unmount();
        self.abort_in_flight();
    }

    #[must_use]
    pub fn render(&self) -> MapView {
        render(&self.state.borrow(), self.region)
    }

    /// Dispatch the press of a callout or button of the rendered view.
    pub fn press(&self, destination: Destination) {
        match destination {
            Destination::OrphanageDetails { id } => self.handle_navigate_to_details(id),
            Destination::SelectMapPosition => self.handle_navigate_to_create(),
        }
    }

    pub fn handle_navigate_to_details(&self, id: OrphanageId) {
        self.navigate(Destination::OrphanageDetails { id });
    }

    pub fn handle_navigate_to_create(&self) {
        self.navigate(Destination::SelectMapPosition);
    }

    fn navigate(&self, destination: Destination) {
        log::info!("Navigate to {destination}");
        self.navigator.navigate(destination);
    }

    fn finish_in_flight(&self, seq: RequestSeq) {
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.as_ref().is_some_and(|(current, _)| *current == seq) {
            *in_flight = None;
        }
    }

    fn abort_in_flight(&self) {
        let Some((seq, handle)) = self.in_flight.borrow_mut().take() else {
            return;
        };
        log::debug!("Abort request #{}", seq.to_raw());
        handle.abort();
    }
}
