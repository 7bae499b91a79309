//! Request/response mediator pipeline.
//!
//! One [`Pipeline`] exists per request type, composed at startup from an
//! ordered list of [`Behaviour`]s around the request's [`Handle`]r. The
//! pipeline itself is stateless and reentrant; concurrent sends share
//! nothing but the collaborators the handler was built with.

mod behaviour;
mod context;
pub mod logging;
pub mod rules;
pub mod validation;

pub use behaviour::{Behaviour, Next};
pub use context::RequestContext;
pub use logging::LoggingBehaviour;
pub use rules::{AsyncRule, RuleSet};
pub use validation::{Validate, ValidationBehaviour};

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;

/// A value describing one intended command or query.
///
/// Requests are immutable once constructed and carry every input parameter
/// of the operation.
pub trait Request: Send + Sync + Sized + 'static {
    /// What a successful invocation produces.
    type Response: Send + 'static;

    /// Tag used by the logging behaviour for start/end events.
    const NAME: &'static str;
}

/// The unit performing the actual business action for one request type.
#[async_trait]
pub trait Handle<R: Request>: Send + Sync {
    /// Execute the request.
    async fn handle(&self, request: R, cx: &RequestContext) -> Result<R::Response, Error>;
}

/// A behaviour chain plus handler for one request type.
pub struct Pipeline<R: Request> {
    behaviours: Vec<Arc<dyn Behaviour<R>>>,
    handler: Arc<dyn Handle<R>>,
}

impl<R: Request> Pipeline<R> {
    /// Start a pipeline around `handler` with no behaviours.
    pub fn new(handler: impl Handle<R> + 'static) -> Self {
        Self {
            behaviours: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    /// Append a behaviour. Behaviours run in the order they were added;
    /// the first addition is the outermost wrapper.
    pub fn behaviour(mut self, behaviour: impl Behaviour<R> + 'static) -> Self {
        self.behaviours.push(Arc::new(behaviour));
        self
    }

    /// Dispatch one request through the chain.
    pub async fn send(&self, request: R, cx: &RequestContext) -> Result<R::Response, Error> {
        Next::new(&self.behaviours, self.handler.as_ref())
            .run(request, cx)
            .await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for pipeline tests.

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::{Handle, Request, RequestContext};
    use crate::domain::Error;

    /// Minimal request type used to exercise behaviour chains.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Echo {
        pub payload: &'static str,
    }

    impl Request for Echo {
        type Response = &'static str;
        const NAME: &'static str = "Echo";
    }

    /// Handler counting invocations and echoing its input.
    #[derive(Default)]
    pub struct EchoHandler {
        pub calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handle<Echo> for EchoHandler {
        async fn handle(&self, request: Echo, _cx: &RequestContext) -> Result<&'static str, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(request.payload)
        }
    }

    /// Handler that always fails.
    pub struct FailingHandler;

    #[async_trait]
    impl Handle<Echo> for FailingHandler {
        async fn handle(&self, _request: Echo, _cx: &RequestContext) -> Result<&'static str, Error> {
            Err(Error::internal("handler exploded"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Echo, EchoHandler};
    use super::*;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn bare_pipeline_invokes_the_handler_once() {
        let handler = EchoHandler::default();
        let calls = handler.calls.clone();
        let pipeline = Pipeline::new(handler);

        let response = pipeline
            .send(Echo { payload: "hello" }, &RequestContext::new())
            .await
            .expect("echo succeeds");

        assert_eq!(response, "hello");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn behaviours_run_outermost_first() {
        use async_trait::async_trait;
        use std::sync::{Arc, Mutex};

        struct Recorder {
            tag: &'static str,
            order: Arc<Mutex<Vec<&'static str>>>,
        }

        #[async_trait]
        impl Behaviour<Echo> for Recorder {
            async fn handle(
                &self,
                request: Echo,
                cx: &RequestContext,
                next: Next<'_, Echo>,
            ) -> Result<&'static str, Error> {
                self.order.lock().expect("order lock").push(self.tag);
                next.run(request, cx).await
            }
        }

        let order = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new(EchoHandler::default())
            .behaviour(Recorder {
                tag: "outer",
                order: order.clone(),
            })
            .behaviour(Recorder {
                tag: "inner",
                order: order.clone(),
            });

        pipeline
            .send(Echo { payload: "ordered" }, &RequestContext::new())
            .await
            .expect("echo succeeds");

        assert_eq!(*order.lock().expect("order lock"), vec!["outer", "inner"]);
    }
}
