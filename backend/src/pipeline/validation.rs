//! Request validation behaviour.
//!
//! Validators for a request type are handed to the behaviour when its
//! pipeline is composed at startup; there is no runtime discovery. The
//! behaviour is the single point where many small failures become one
//! aggregated error.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Error, ValidationFailure};
use crate::pipeline::{Behaviour, Next, Request, RequestContext};

/// A unit producing zero or more field-keyed failures for a request.
///
/// Returning `Err` aborts the whole chain immediately; the existence-check
/// rule uses this to surface not-found conditions from inside validation.
#[async_trait]
pub trait Validate<R>: Send + Sync {
    /// Inspect `request` and report its failures.
    async fn validate(
        &self,
        request: &R,
        cx: &RequestContext,
    ) -> Result<Vec<ValidationFailure>, Error>;
}

/// Runs every registered validator and aggregates their failures by field
/// before the handler is allowed to run.
///
/// With no validators registered the behaviour is a passthrough. With a
/// non-empty merged failure set it short-circuits: the inner handler never
/// observes a request that failed any registered validator.
pub struct ValidationBehaviour<R> {
    validators: Vec<Arc<dyn Validate<R>>>,
}

impl<R> ValidationBehaviour<R> {
    /// Behaviour over an explicit validator list.
    pub fn new(validators: Vec<Arc<dyn Validate<R>>>) -> Self {
        Self { validators }
    }

    /// Behaviour over a single validator.
    pub fn single(validator: impl Validate<R> + 'static) -> Self {
        Self {
            validators: vec![Arc::new(validator)],
        }
    }

    /// Behaviour with no validators: a passthrough.
    pub fn none() -> Self {
        Self {
            validators: Vec::new(),
        }
    }
}

/// Merge failures sharing a field into one entry, comma-joining distinct
/// messages. Field order follows first appearance; message order within a
/// field does too.
fn merge_by_field(failures: Vec<ValidationFailure>) -> Vec<ValidationFailure> {
    let mut merged: Vec<ValidationFailure> = Vec::new();
    for failure in failures {
        match merged.iter_mut().find(|entry| entry.field == failure.field) {
            Some(entry) => {
                let duplicate = entry
                    .message
                    .split(',')
                    .any(|existing| existing == failure.message);
                if !duplicate {
                    entry.message.push(',');
                    entry.message.push_str(&failure.message);
                }
            }
            None => merged.push(failure),
        }
    }
    merged
}

#[async_trait]
impl<R: Request> Behaviour<R> for ValidationBehaviour<R> {
    async fn handle(
        &self,
        request: R,
        cx: &RequestContext,
        next: Next<'_, R>,
    ) -> Result<R::Response, Error> {
        if self.validators.is_empty() {
            return next.run(request, cx).await;
        }

        let mut failures = Vec::new();
        for validator in &self.validators {
            failures.extend(validator.validate(&request, cx).await?);
        }

        let failures = merge_by_field(failures);
        if failures.is_empty() {
            next.run(request, cx).await
        } else {
            Err(Error::validation(failures))
        }
    }
}
