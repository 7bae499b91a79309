//! Declarative validation rules.
//!
//! A [`RuleSet`] is an ordered list of per-field rules: cheap synchronous
//! predicates plus asynchronous checks that may consult collaborators.
//! Rules can be guarded with `when` conditions so that an expensive check
//! only runs once the cheaper rule on the same field has passed.

use async_trait::async_trait;

use crate::domain::{Error, ValidationFailure};
use crate::pipeline::{RequestContext, Validate};

/// An asynchronous rule, e.g. an existence check against a repository.
///
/// `Ok(Some(message))` records a failure for the rule's field,
/// `Ok(None)` passes, and `Err` aborts validation outright.
#[async_trait]
pub trait AsyncRule<R>: Send + Sync {
    /// Evaluate the rule against `request`.
    async fn check(&self, request: &R, cx: &RequestContext) -> Result<Option<String>, Error>;
}

type SyncCheck<R> = Box<dyn Fn(&R) -> Option<String> + Send + Sync>;
type Guard<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

enum Check<R> {
    Sync(SyncCheck<R>),
    Async(Box<dyn AsyncRule<R>>),
}

struct Rule<R> {
    field: &'static str,
    when: Option<Guard<R>>,
    check: Check<R>,
}

/// Ordered, field-keyed rule list for one request type.
pub struct RuleSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R: Send + Sync> RuleSet<R> {
    /// Empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a synchronous rule for `field`. The closure returns the failure
    /// message when the rule is violated.
    pub fn rule(
        mut self,
        field: &'static str,
        check: impl Fn(&R) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field,
            when: None,
            check: Check::Sync(Box::new(check)),
        });
        self
    }

    /// Add an asynchronous rule for `field`.
    pub fn async_rule(mut self, field: &'static str, rule: impl AsyncRule<R> + 'static) -> Self {
        self.rules.push(Rule {
            field,
            when: None,
            check: Check::Async(Box::new(rule)),
        });
        self
    }

    /// Add an asynchronous rule for `field` that only runs when `when`
    /// holds, so a failed guard rule suppresses the lookup entirely.
    pub fn async_rule_when(
        mut self,
        field: &'static str,
        when: impl Fn(&R) -> bool + Send + Sync + 'static,
        rule: impl AsyncRule<R> + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field,
            when: Some(Box::new(when)),
            check: Check::Async(Box::new(rule)),
        });
        self
    }
}

impl<R: Send + Sync> Default for RuleSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Send + Sync> Validate<R> for RuleSet<R> {
    async fn validate(
        &self,
        request: &R,
        cx: &RequestContext,
    ) -> Result<Vec<ValidationFailure>, Error> {
        let mut failures = Vec::new();
        for rule in &self.rules {
            if let Some(when) = &rule.when {
                if !when(request) {
                    continue;
                }
            }
            match &rule.check {
                Check::Sync(check) => {
                    if let Some(message) = check(request) {
                        failures.push(ValidationFailure::new(rule.field, message));
                    }
                }
                Check::Async(rule_impl) => {
                    cx.ensure_active()?;
                    if let Some(message) = rule_impl.check(request, cx).await? {
                        failures.push(ValidationFailure::new(rule.field, message));
                    }
                }
            }
        }
        Ok(failures)
    }
}

/// Failure message for an empty text field, `None` when the field is set.
pub fn not_empty(field: &str, value: &str) -> Option<String> {
    value
        .trim()
        .is_empty()
        .then(|| format!("{field} must not be empty"))
}

/// Failure message for a non-positive identifier or count.
pub fn greater_than_zero(field: &str, value: i64) -> Option<String> {
    (value <= 0).then(|| format!("{field} must be greater than 0"))
}
