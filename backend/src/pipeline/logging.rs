//! Request logging behaviour.

use std::time::Instant;

use async_trait::async_trait;
use tracing::info;

use crate::domain::Error;
use crate::pipeline::{Behaviour, Next, Request, RequestContext};

/// Emits a start event on entry and an end event with the elapsed wall
/// clock on exit, success or failure. A pure observer: the request, the
/// response, and any error pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBehaviour;

#[async_trait]
impl<R: Request> Behaviour<R> for LoggingBehaviour {
    async fn handle(
        &self,
        request: R,
        cx: &RequestContext,
        next: Next<'_, R>,
    ) -> Result<R::Response, Error> {
        info!(request = R::NAME, "request started");
        let started = Instant::now();
        let result = next.run(request, cx).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(request = R::NAME, elapsed_ms, "request finished"),
            Err(error) => {
                info!(request = R::NAME, elapsed_ms, error = %error, "request finished");
            }
        }
        result
    }
}
