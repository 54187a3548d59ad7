//! Timed callbacks that can be called off.
//!
//! Every deferred effect carries a [`CancellationToken`]. Components hold a
//! [`TimerScope`] tied to their reactive owner; on cleanup the scope cancels
//! its token and clears every timer it started, so nothing fires into
//! disposed state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    own: Arc<AtomicBool>,
    inherited: Vec<Arc<AtomicBool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is cancelled when the current reactive owner is cleaned up.
    pub fn owned() -> Self {
        let token = Self::new();
        let on_teardown = token.clone();
        on_cleanup(move || on_teardown.cancel());
        token
    }

    /// A token cancelled along with `self`, which can also be cancelled alone.
    pub fn child(&self) -> Self {
        let mut inherited = self.inherited.clone();
        inherited.push(Arc::clone(&self.own));
        Self {
            own: Arc::default(),
            inherited,
        }
    }

    pub fn cancel(&self) {
        self.own.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        std::iter::once(&self.own)
            .chain(&self.inherited)
            .any(|flag| flag.load(Ordering::Acquire))
    }

    /// Runs `f` unless the token has been cancelled. Returns whether it ran.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_cancelled() {
            tracing::debug!("skipping cancelled deferred effect");
            return false;
        }
        f();
        true
    }
}

/// A pending timer and the token guarding it.
#[derive(Debug, Clone)]
pub struct Scheduled {
    token: CancellationToken,
    handle: Option<TimeoutHandle>,
}

impl Scheduled {
    pub fn cancel(&self) {
        self.token.cancel();
        if let Some(handle) = self.handle {
            handle.clear();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Calls `f` after `delay` unless `token` is cancelled by then.
pub fn schedule<F>(delay: Duration, token: CancellationToken, f: F) -> Scheduled
where
    F: FnOnce() + 'static,
{
    let guard = token.clone();
    let handle = set_timeout_with_handle(
        move || {
            guard.run(f);
        },
        delay,
    )
    .map_err(|err| tracing::error!(?err, "failed to start timer"))
    .ok();

    Scheduled { token, handle }
}

/// Timers owned by one component.
#[derive(Debug, Clone, Default)]
pub struct TimerScope {
    token: CancellationToken,
    pending: Arc<Mutex<Vec<Scheduled>>>,
}

impl TimerScope {
    /// A scope released when the current reactive owner is cleaned up.
    pub fn owned() -> Self {
        let scope = Self::default();
        let on_teardown = scope.clone();
        on_cleanup(move || on_teardown.release());
        scope
    }

    /// A token that is cancelled when this scope is released.
    pub fn token(&self) -> CancellationToken {
        self.token.child()
    }

    /// Like [`schedule`], but cancelled and cleared when the scope is released.
    pub fn schedule<F>(&self, delay: Duration, f: F) -> Scheduled
    where
        F: FnOnce() + 'static,
    {
        let scheduled = schedule(delay, self.token(), f);
        self.track(scheduled.clone());
        scheduled
    }

    pub fn is_released(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels the scope's token and clears every timer it still tracks.
    pub fn release(&self) {
        self.token.cancel();
        for scheduled in self.pending().drain(..) {
            scheduled.cancel();
        }
    }

    fn track(&self, scheduled: Scheduled) {
        let mut pending = self.pending();
        pending.retain(|s| !s.is_cancelled());
        pending.push(scheduled);
    }

    fn pending(&self) -> MutexGuard<'_, Vec<Scheduled>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn unstarted(token: CancellationToken) -> Scheduled {
        Scheduled {
            token,
            handle: None,
        }
    }

    #[test]
    fn test_runs_while_live() {
        let token = CancellationToken::new();
        let hits = Cell::new(0);
        assert!(token.run(|| hits.set(hits.get() + 1)));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_cancelled_token_skips() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();

        let hits = Cell::new(0);
        assert!(token.is_cancelled());
        assert!(!token.run(|| hits.set(hits.get() + 1)));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_tokens_are_independent() {
        let a = CancellationToken::new();
        let b = CancellationToken::new();
        a.cancel();
        assert!(!b.is_cancelled());
    }

    #[test]
    fn test_child_follows_parent_but_not_the_reverse() {
        let parent = CancellationToken::new();
        let child = parent.child();
        let grandchild = child.child();

        child.cancel();
        assert!(!parent.is_cancelled());
        assert!(grandchild.is_cancelled());

        let sibling = parent.child();
        assert!(!sibling.is_cancelled());
        parent.cancel();
        assert!(sibling.is_cancelled());
    }

    #[test]
    fn test_owned_token_cancelled_on_owner_cleanup() {
        let owner = Owner::new();
        let token = owner.with(CancellationToken::owned);
        assert!(!token.is_cancelled());

        owner.cleanup();

        assert!(token.is_cancelled());
    }

    #[test]
    fn test_scope_released_on_owner_cleanup() {
        let owner = Owner::new();
        let scope = owner.with(TimerScope::owned);
        let token = scope.token();
        scope.track(unstarted(scope.token()));

        let hits = Cell::new(0);
        owner.cleanup();

        assert!(scope.is_released());
        assert!(!token.run(|| hits.set(hits.get() + 1)));
        assert_eq!(hits.get(), 0);
        assert!(scope.pending().is_empty());
    }

    #[test]
    fn test_release_cancels_tracked_timers() {
        let scope = TimerScope::default();
        let first = unstarted(scope.token());
        let second = unstarted(CancellationToken::new());
        scope.track(first.clone());
        scope.track(second.clone());

        scope.release();

        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
    }

    #[test]
    fn test_track_drops_cancelled_timers() {
        let scope = TimerScope::default();
        let stale = unstarted(CancellationToken::new());
        scope.track(stale.clone());
        stale.cancel();

        scope.track(unstarted(scope.token()));

        assert_eq!(scope.pending().len(), 1);
    }
}
