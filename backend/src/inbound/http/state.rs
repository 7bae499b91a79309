//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only
//! on the composed pipelines and stay testable with mock repositories.

use std::sync::Arc;

use crate::domain::ports::UserRepository;
use crate::domain::users::UserPipelines;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<UserPipelines>,
}

impl HttpState {
    /// Compose the pipelines over `repository`.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            users: Arc::new(UserPipelines::new(repository)),
        }
    }
}
