use crate::{entities::Orphanage, Error, Result};

/// Sequence number of a fetch request.
///
/// Numbers are issued in increasing order, so the highest
/// one belongs to the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Unfocused,
    Fetching,
    Displaying,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The response replaced the orphanages.
    Applied { count: usize },
    /// The request failed and the previous orphanages were kept.
    Failed(Error),
    /// A newer request was issued in the meantime.
    Superseded,
    /// The request was aborted or the screen is no longer mounted.
    Cancelled,
}

/// Synchronous state of the map screen.
#[derive(Debug, Default)]
pub struct ScreenState {
    mounted: bool,
    focused: bool,
    last_issued: u64,
    pending: Option<RequestSeq>,
    orphanages: Vec<Orphanage>,
    last_error: Option<Error>,
}

impl ScreenState {
    pub fn phase(&self) -> Phase {
        if !self.mounted {
            Phase::Unmounted
        } else if self.pending.is_some() {
            Phase::Fetching
        } else if self.focused {
            Phase::Displaying
        } else {
            Phase::Unfocused
        }
    }

    pub fn orphanages(&self) -> &[Orphanage] {
        &self.orphanages
    }

    pub const fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub const fn pending(&self) -> Option<RequestSeq> {
        self.pending
    }

    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        log::debug!("Mount map screen");
        self.mounted = true;
        self.focused = false;
        self.pending = None;
        self.orphanages.clear();
        self.last_error = None;
    }

    /// Start a new request and return its sequence number.
    ///
    /// Returns `None` if the screen is not mounted.
    pub fn begin_fetch(&mut self) -> Option<RequestSeq> {
        if !self.mounted {
            log::warn!("Ignore focus of unmounted map screen");
            return None;
        }
        self.focused = true;
        self.last_issued += 1;
        let seq = RequestSeq(self.last_issued);
        if let Some(previous) = self.pending.replace(seq) {
            log::debug!(
                "Request #{} supersedes request #{}",
                seq.to_raw(),
                previous.to_raw()
            );
        }
        Some(seq)
    }

    pub fn complete_fetch(
        &mut self,
        seq: RequestSeq,
        result: Result<Vec<Orphanage>>,
    ) -> FetchOutcome {
        if !self.mounted {
            log::debug!("Discard response #{} of unmounted screen", seq.to_raw());
            return FetchOutcome::Cancelled;
        }
        if self.pending != Some(seq) {
            log::debug!("Discard outdated response #{}", seq.to_raw());
            return if seq.to_raw() < self.last_issued {
                FetchOutcome::Superseded
            } else {
                FetchOutcome::Cancelled
            };
        }
        self.pending = None;
        match result {
            Ok(orphanages) => {
                let count = orphanages.len();
                log::debug!("Loaded {count} orphanages");
                self.orphanages = orphanages;
                self.last_error = None;
                FetchOutcome::Applied { count }
            }
            Err(err) => {
                log::warn!("{err}");
                self.last_error = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Returns the request that has been cancelled, if any.
    pub fn blur(&mut self) -> Option<RequestSeq> {
        if self.mounted {
            log::debug!("Map screen lost focus");
        }
        self.focused = false;
        self.pending.take()
    }

    /// Returns the request that has been cancelled, if any.
    pub fn unmount(&mut self) -> Option<RequestSeq> {
        if self.mounted {
            log::debug!("Unmount map screen");
        }
        self.mounted = false;
        self.focused = false;
        self.orphanages.clear();
        self.last_error = None;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{MapPoint, OrphanageId};

    fn orphanage(id: i64) -> Orphanage {
        Orphanage {
            id: OrphanageId::new(id),
            name: format!("Orphanage {id}"),
            pos: MapPoint::from_lat_lng_deg_unchecked(-23.94, -46.37),
        }
    }

    fn mounted() -> ScreenState {
        let mut state = ScreenState::default();
        state.mount();
        state
    }

    #[test]
    fn lifecycle_phases() {
        let mut state = ScreenState::default();
        assert_eq!(Phase::Unmounted, state.phase());
        state.mount();
        assert_eq!(Phase::Unfocused, state.phase());
        let seq = state.begin_fetch().unwrap();
        assert_eq!(Phase::Fetching, state.phase());
        state.complete_fetch(seq, Ok(vec![]));
        assert_eq!(Phase::Displaying, state.phase());
        state.blur();
        assert_eq!(Phase::Unfocused, state.phase());
        state.unmount();
        assert_eq!(Phase::Unmounted, state.phase());
    }

    #[test]
    fn replace_instead_of_merge() {
        let mut state = mounted();
        let seq = state.begin_fetch().unwrap();
        state.complete_fetch(seq, Ok(vec![orphanage(1), orphanage(2)]));
        let seq = state.begin_fetch().unwrap();
        let outcome = state.complete_fetch(seq, Ok(vec![orphanage(3)]));
        assert_eq!(FetchOutcome::Applied { count: 1 }, outcome);
        assert_eq!(vec![orphanage(3)], state.orphanages());
    }

    #[test]
    fn only_the_latest_request_is_applied() {
        let mut state = mounted();
        let first = state.begin_fetch().unwrap();
        let second = state.begin_fetch().unwrap();
        assert!(first < second);
        assert_eq!(
            FetchOutcome::Applied { count: 1 },
            state.complete_fetch(second, Ok(vec![orphanage(2)]))
        );
        assert_eq!(
            FetchOutcome::Superseded,
            state.complete_fetch(first, Ok(vec![orphanage(1)]))
        );
        assert_eq!(vec![orphanage(2)], state.orphanages());
    }

    #[test]
    fn keep_stale_orphanages_on_failure() {
        let mut state = mounted();
        let seq = state.begin_fetch().unwrap();
        state.complete_fetch(seq, Ok(vec![orphanage(1)]));
        let seq = state.begin_fetch().unwrap();
        let err = Error::Fetch("offline".into());
        assert_eq!(
            FetchOutcome::Failed(err.clone()),
            state.complete_fetch(seq, Err(err.clone()))
        );
        assert_eq!(vec![orphanage(1)], state.orphanages());
        assert_eq!(Some(&err), state.last_error());

        let seq = state.begin_fetch().unwrap();
        state.complete_fetch(seq, Ok(vec![]));
        assert!(state.last_error().is_none());
        assert!(state.orphanages().is_empty());
    }

    #[test]
    fn ignore_responses_after_blur() {
        let mut state = mounted();
        let seq = state.begin_fetch().unwrap();
        assert_eq!(Some(seq), state.blur());
        assert_eq!(
            FetchOutcome::Cancelled,
            state.complete_fetch(seq, Ok(vec![orphanage(1)]))
        );
        assert!(state.orphanages().is_empty());
    }

    #[test]
    fn ignore_responses_after_unmount() {
        let mut state = mounted();
        let seq = state.begin_fetch().unwrap();
        state.complete_fetch(seq, Ok(vec![orphanage(1)]));
        let seq = state.begin_fetch().unwrap();
        assert_eq!(Some(seq), state.unmount());
        assert!(state.orphanages().is_empty());
        assert_eq!(
            FetchOutcome::Cancelled,
            state.complete_fetch(seq, Ok(vec![orphanage(2)]))
        );
        assert!(state.orphanages().is_empty());
        assert_eq!(Phase::Unmounted, state.phase());
    }

    #[test]
    fn do_not_fetch_while_unmounted() {
        let mut state = ScreenState::default();
        assert!(state.begin_fetch().is_none());
        assert_eq!(Phase::Unmounted, state.phase());
    }

    #[test]
    fn mount_is_idempotent() {
        let mut state = mounted();
        let seq = state.begin_fetch().unwrap();
        state.complete_fetch(seq, Ok(vec![orphanage(1)]));
        state.mount();
        assert_eq!(1, state.orphanages().len());
    }

    #[test]
    fn sequence_numbers_survive_remount() {
        let mut state = mounted();
        let first = state.begin_fetch().unwrap();
        state.unmount();
        state.mount();
        let second = state.begin_fetch().unwrap();
        assert!(second > first);
        assert_eq!(
            FetchOutcome::Superseded,
            state.complete_fetch(first, Ok(vec![orphanage(1)]))
        );
        assert!(state.orphanages().is_empty());
    }
}
