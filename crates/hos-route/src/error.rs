//! Routing-subsystem error type.

use thiserror::Error;

/// Errors produced by `hos-route`.
///
/// These describe *provider* failures.  Callers are expected to recover via
/// [`resolve_route`][crate::resolve_route] rather than propagate them into
/// the simulator.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route provider failure: {0}")]
    Provider(String),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
