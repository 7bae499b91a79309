//! Behaviour chain composition.
//!
//! Behaviours are explicit middleware: each receives the request plus a
//! [`Next`] handle onto the rest of the chain and decides whether to
//! delegate. Chains are composed once at startup; dispatch walks a slice,
//! no reflection or type registry involved.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::pipeline::{Handle, Request, RequestContext};

/// A pipeline stage wrapping the next stage.
#[async_trait]
pub trait Behaviour<R: Request>: Send + Sync {
    /// Handle `request`, delegating to `next` zero or one times.
    async fn handle(
        &self,
        request: R,
        cx: &RequestContext,
        next: Next<'_, R>,
    ) -> Result<R::Response, Error>;
}

/// Handle onto the remaining stages of a behaviour chain.
pub struct Next<'a, R: Request> {
    behaviours: &'a [Arc<dyn Behaviour<R>>],
    handler: &'a dyn Handle<R>,
}

impl<'a, R: Request> Next<'a, R> {
    pub(crate) fn new(behaviours: &'a [Arc<dyn Behaviour<R>>], handler: &'a dyn Handle<R>) -> Self {
        Self {
            behaviours,
            handler,
        }
    }

    /// Run the remaining behaviours and finally the handler.
    pub async fn run(self, request: R, cx: &RequestContext) -> Result<R::Response, Error> {
        match self.behaviours.split_first() {
            Some((current, rest)) => {
                current
                    .handle(request, cx, Next::new(rest, self.handler))
                    .await
            }
            None => self.handler.handle(request, cx).await,
        }
    }
}
