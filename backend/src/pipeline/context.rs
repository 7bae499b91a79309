//! Per-invocation context threaded through behaviours, validators,
//! handlers, and repository calls.

use tokio_util::sync::CancellationToken;

use crate::domain::Error;

/// Context for a single pipeline invocation.
///
/// The only state carried today is the caller's cancellation signal. Every
/// stage observes it before starting a new suspending operation; the
/// subsystem imposes no timeouts of its own.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: CancellationToken,
}

impl RequestContext {
    /// Context with a cancellation token that never fires.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context driven by the caller's cancellation token.
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self { cancellation }
    }

    /// The cancellation token for this invocation.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Fail with [`crate::domain::ErrorCode::Cancelled`] once the caller has
    /// cancelled, instead of starting new work.
    pub fn ensure_active(&self) -> Result<(), Error> {
        if self.is_cancelled() {
            Err(Error::cancelled("request cancelled before completion"))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn fresh_context_is_active() {
        let cx = RequestContext::new();
        assert!(!cx.is_cancelled());
        assert!(cx.ensure_active().is_ok());
    }

    #[test]
    fn cancelled_token_surfaces_as_cancelled_error() {
        let token = CancellationToken::new();
        token.cancel();
        let cx = RequestContext::with_cancellation(token);

        let error = cx.ensure_active().expect_err("cancelled");
        assert_eq!(error.code(), ErrorCode::Cancelled);
    }
}
