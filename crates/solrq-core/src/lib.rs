//! Shared pieces for the solrq crates: the error taxonomy, the parameter
//! value model, endpoint configuration and the transport seam.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use value::ParamValue;
