use crate::error::Result;
use crate::types::{Request, Response};

/// Performs a single HTTP exchange. Implementations must not retry.
pub trait Transport: Send + Sync {
    fn get(&self, request: &Request) -> Result<Response>;
    fn post(&self, request: &Request) -> Result<Response>;
}
