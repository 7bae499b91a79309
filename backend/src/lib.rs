//! User registry service library.
//!
//! A CRUD web service for user records built around a mediator request
//! pipeline: every command and query is dispatched through a logging
//! behaviour and a validation behaviour before its handler touches the
//! repository.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod pipeline;

pub use middleware::Trace;
