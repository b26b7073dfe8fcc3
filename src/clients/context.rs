//! Cancellation and deadline context for API calls.
//!
//! Every call made through a [`Client`](crate::Client) is bound to a
//! [`RequestContext`]. The client never invents its own timeouts: a call ends
//! early only when its context is cancelled or its deadline passes.

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// The reason a [`RequestContext`] is done.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// The context was cancelled explicitly.
    #[error("context canceled")]
    Canceled,

    /// The context deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// A cancellation token plus an optional deadline.
///
/// Cloning a context shares its token: cancelling any clone cancels all of
/// them. Use [`RequestContext::child`] for a context that can be cancelled on
/// its own while still following its parent.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use animal_rescue::{ContextError, RequestContext};
///
/// let ctx = RequestContext::with_timeout(Duration::from_secs(5));
/// assert!(ctx.err().is_none());
///
/// ctx.cancel();
/// assert_eq!(ctx.err(), Some(ContextError::Canceled));
/// ```
#[derive(Clone, Debug)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never done unless cancelled.
    #[must_use]
    pub fn background() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A context whose deadline is `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`.
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Wraps an existing cancellation token, e.g. one owned by a shutdown
    /// coordinator.
    #[must_use]
    pub const fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Derives a context that is cancelled with its parent but can also be
    /// cancelled independently. The child keeps the parent's deadline.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derives a child context whose deadline is the earlier of the parent's
    /// and `timeout` from now.
    #[must_use]
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let requested = Instant::now() + timeout;
        let deadline = self
            .deadline
            .map_or(requested, |parent| parent.min(requested));
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Cancels this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the underlying cancellation token.
    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns why the context is done, or `None` while it is still live.
    ///
    /// Explicit cancellation is reported ahead of an expired deadline.
    #[must_use]
    pub fn err(&self) -> Option<ContextError> {
        if self.token.is_cancelled() {
            return Some(ContextError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Completes once the context is done.
    pub async fn done(&self) -> ContextError {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    () = self.token.cancelled() => ContextError::Canceled,
                    () = tokio::time::sleep_until(deadline) => ContextError::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                ContextError::Canceled
            }
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_context_is_live() {
        let ctx = RequestContext::background();
        assert!(ctx.err().is_none());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn test_cancel_propagates_to_clones_and_children() {
        let ctx = RequestContext::background();
        let clone = ctx.clone();
        let child = ctx.child();

        ctx.cancel();

        assert_eq!(clone.err(), Some(ContextError::Canceled));
        assert_eq!(child.err(), Some(ContextError::Canceled));
    }

    #[test]
    fn test_cancelling_child_leaves_parent_live() {
        let ctx = RequestContext::background();
        let child = ctx.child();

        child.cancel();

        assert!(ctx.err().is_none());
        assert_eq!(child.err(), Some(ContextError::Canceled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_expires() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(50));
        assert!(ctx.err().is_none());

        assert_eq!(ctx.done().await, ContextError::DeadlineExceeded);
        assert_eq!(ctx.err(), Some(ContextError::DeadlineExceeded));
    }

    #[tokio::test(start_paused = true)]
    async fn test_child_with_timeout_keeps_earlier_parent_deadline() {
        let parent = RequestContext::with_timeout(Duration::from_millis(10));
        let child = parent.child_with_timeout(Duration::from_secs(60));

        assert_eq!(child.deadline(), parent.deadline());
    }

    #[test]
    fn test_cancellation_reported_before_deadline() {
        let ctx = RequestContext::with_deadline(Instant::now());
        ctx.cancel();
        assert_eq!(ctx.err(), Some(ContextError::Canceled));
    }

    #[tokio::test]
    async fn test_done_resolves_on_cancel() {
        let ctx = RequestContext::background();
        let waiter = ctx.clone();
        let handle = tokio::spawn(async move { waiter.done().await });

        ctx.cancel();

        assert_eq!(handle.await.unwrap(), ContextError::Canceled);
    }
}
