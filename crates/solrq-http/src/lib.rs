//! solrq-http
//!
//! Endpoint resolution, the reqwest-backed transport, and [`SolrClient`], which
//! encodes parameter groups and sends them. See `client` for the operations.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod client;
pub mod endpoint;
pub mod transport;

pub use client::{QuickQuery, SolrClient};
pub use endpoint::{resolve, Endpoint, EndpointRef};
pub use transport::HttpTransport;
