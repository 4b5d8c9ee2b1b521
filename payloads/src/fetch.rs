//! Lifecycle of one retrieval slot: at most one attempt in flight, newer
//! attempts supersede older ones, and a superseded attempt never writes.
//!
//! The slot is platform neutral. The browser hook owns one per endpoint and
//! drives it from `spawn_local`; tests drive it from tokio.

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;

/// Distinguishes "never fetched" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}

impl<T> From<Option<T>> for FetchState<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFetched, Self::Fetched)
    }
}

/// Identifies one attempt within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

pub struct FetchSlot<T> {
    data: FetchState<T>,
    loading: bool,
    error: Option<String>,
    current: AttemptId,
    in_flight: Option<AbortHandle>,
}

impl<T> FetchSlot<T> {
    pub fn new(initial: Option<T>) -> Self {
        Self {
            data: initial.into(),
            loading: false,
            error: None,
            current: AttemptId(0),
            in_flight: None,
        }
    }

    /// A slot that reports `loading` before its first attempt starts, so an
    /// enabled view does not flash an empty state.
    pub fn pending(initial: Option<T>) -> Self {
        let mut slot = Self::new(initial);
        slot.loading = true;
        slot
    }

    /// Slot for a view that may start disabled. Only an enabled one reports
    /// `loading` ahead of its first attempt.
    pub fn for_view(initial: Option<T>, enabled: bool) -> Self {
        if enabled {
            Self::pending(initial)
        } else {
            Self::new(initial)
        }
    }

    pub fn data(&self) -> &FetchState<T> {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a new attempt, aborting whatever was in flight.
    ///
    /// The returned registration must wrap the network future (see
    /// [`guarded`]); the id must accompany its outcome to [`Self::resolve`].
    pub fn begin(&mut self) -> (AttemptId, AbortRegistration) {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(attempt = self.current.0, "superseding attempt");
            previous.abort();
        }
        self.current = AttemptId(self.current.0 + 1);
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        self.loading = true;
        self.error = None;
        (self.current, registration)
    }

    /// [`Self::begin`] when `enabled`. A disabled trigger starts nothing and
    /// leaves data, loading, error and any attempt in flight as they were.
    pub fn begin_if(
        &mut self,
        enabled: bool,
    ) -> Option<(AttemptId, AbortRegistration)> {
        enabled.then(|| self.begin())
    }

    fn is_current(&self, attempt: AttemptId) -> bool {
        self.in_flight.is_some() && attempt == self.current
    }

    /// Record the outcome of an attempt. Returns false, leaving the slot
    /// untouched, when the attempt has been superseded or cancelled.
    pub fn resolve(
        &mut self,
        attempt: AttemptId,
        outcome: Result<T, String>,
    ) -> bool {
        if !self.is_current(attempt) {
            tracing::debug!(attempt = attempt.0, "dropping stale outcome");
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(data) => {
                self.data = FetchState::Fetched(data);
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error);
            }
        }
        self.loading = false;
        true
    }

    /// Teardown: abort the attempt in flight so it can no longer write.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for FetchSlot<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `fut` unless its attempt is aborted first; `None` means superseded.
pub async fn guarded<F: Future>(
    registration: AbortRegistration,
    fut: F,
) -> Option<F::Output> {
    Abortable::new(fut, registration).await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::sync::oneshot;

    type Reply = Result<&'static str, String>;

    async fn respond(rx: oneshot::Receiver<Reply>) -> Reply {
        rx.await.unwrap_or_else(|_| Err("sender dropped".into()))
    }

    #[tokio::test]
    async fn late_superseded_response_never_lands() {
        let slot = RefCell::new(FetchSlot::pending(None));
        let (tx0, rx0) = oneshot::channel::<Reply>();
        let (tx1, rx1) = oneshot::channel::<Reply>();

        let (first, first_registration) = slot.borrow_mut().begin();
        let (second, second_registration) = slot.borrow_mut().begin();

        let first_attempt = async {
            match guarded(first_registration, respond(rx0)).await {
                Some(reply) => slot.borrow_mut().resolve(first, reply),
                None => false,
            }
        };
        let second_attempt = async {
            match guarded(second_registration, respond(rx1)).await {
                Some(reply) => slot.borrow_mut().resolve(second, reply),
                None => false,
            }
        };
        // token 1 answers before token 0
        let network = async {
            let _ = tx1.send(Ok("token-1"));
            tokio::task::yield_now().await;
            let _ = tx0.send(Ok("token-0"));
        };

        let (first_applied, second_applied, ()) =
            tokio::join!(first_attempt, second_attempt, network);

        assert!(!first_applied);
        assert!(second_applied);
        let slot = slot.borrow();
        assert_eq!(slot.data().as_ref(), Some(&"token-1"));
        assert!(!slot.loading());
        assert_eq!(slot.error(), None);
    }

    #[test]
    fn stale_outcome_delivered_after_supersede_is_ignored() {
        let mut slot = FetchSlot::new(None);
        let (first, _first_registration) = slot.begin();
        let (second, _second_registration) = slot.begin();

        assert!(slot.resolve(second, Ok("new")));
        assert!(!slot.resolve(first, Ok("old")));
        assert!(!slot.resolve(first, Err("Request failed with 500".into())));

        assert_eq!(slot.data().as_ref(), Some(&"new"));
        assert_eq!(slot.error(), None);
    }

    #[test]
    fn failure_keeps_previous_data_and_clears_loading() {
        let mut slot = FetchSlot::new(None);
        let (attempt, _registration) = slot.begin();
        slot.resolve(attempt, Ok(vec![1, 2, 3]));

        let (attempt, _registration) = slot.begin();
        assert!(slot.loading());
        slot.resolve(attempt, Err("Request failed with 500".into()));

        assert_eq!(slot.data().as_ref(), Some(&vec![1, 2, 3]));
        assert_eq!(slot.error(), Some("Request failed with 500"));
        assert!(!slot.loading());
    }

    #[test]
    fn new_attempt_clears_previous_error() {
        let mut slot: FetchSlot<u32> = FetchSlot::new(Some(7));
        let (attempt, _registration) = slot.begin();
        slot.resolve(attempt, Err("Network error".into()));
        assert!(slot.error().is_some());

        slot.begin();
        assert_eq!(slot.error(), None);
        assert!(slot.loading());
        assert_eq!(slot.data().as_ref(), Some(&7));
    }

    #[tokio::test]
    async fn cancelled_attempt_makes_no_mutation() {
        let mut slot: FetchSlot<u32> = FetchSlot::new(None);
        let (attempt, registration) = slot.begin();
        slot.cancel();

        let outcome = guarded(registration, async { 42 }).await;
        assert_eq!(outcome, None);
        assert!(!slot.resolve(attempt, Ok(42)));
        assert!(slot.loading());
        assert_eq!(slot.error(), None);
        assert!(!slot.data().is_fetched());
        assert!(!slot.has_in_flight());
    }

    #[test]
    fn refetch_with_stable_backend_is_idempotent() {
        let mut slot = FetchSlot::new(None);
        let (attempt, _registration) = slot.begin();
        slot.resolve(attempt, Ok("snapshot"));
        let first = slot.data().clone();

        let (attempt, _registration) = slot.begin();
        slot.resolve(attempt, Ok("snapshot"));
        assert_eq!(slot.data(), &first);
    }

    #[test]
    fn disabled_trigger_changes_nothing() {
        let mut slot = FetchSlot::for_view(Some(vec![4, 2]), false);
        assert!(!slot.loading());

        assert!(slot.begin_if(false).is_none());
        assert_eq!(slot.data().as_ref(), Some(&vec![4, 2]));
        assert!(!slot.loading());
        assert_eq!(slot.error(), None);
        assert!(!slot.has_in_flight());
    }

    #[test]
    fn disabled_trigger_keeps_previous_outcome() {
        let mut slot: FetchSlot<u32> = FetchSlot::for_view(None, true);
        assert!(slot.loading());
        let (attempt, _registration) = slot.begin_if(true).unwrap();
        slot.resolve(attempt, Err("Request failed with 500".to_string()));

        assert!(slot.begin_if(false).is_none());
        assert_eq!(slot.error(), Some("Request failed with 500"));
        assert!(!slot.loading());
        assert!(!slot.data().is_fetched());
    }

    #[tokio::test]
    async fn teardown_stops_the_attempt_in_flight() {
        let mut slot: FetchSlot<&str> = FetchSlot::for_view(None, true);
        let (attempt, registration) = slot.begin_if(true).unwrap();
        let (tx, rx) = oneshot::channel::<Reply>();

        slot.cancel();
        let _ = tx.send(Ok("late"));
        assert_eq!(guarded(registration, respond(rx)).await, None);
        assert!(!slot.resolve(attempt, Ok("late")));
        assert!(!slot.data().is_fetched());
        assert!(!slot.has_in_flight());
    }

    #[test]
    fn initial_value_is_reported_as_fetched() {
        let slot = FetchSlot::new(Some(Vec::<u8>::new()));
        assert!(slot.data().is_fetched());
        assert!(!slot.loading());
        assert!(FetchSlot::<u8>::pending(None).loading());
    }
}
