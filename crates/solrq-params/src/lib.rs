//! Typed Solr request parameters and the encoder that turns them into
//! query strings or update bodies.
//!
//! ```
//! use solrq_params::{encode, CommonParams, Query, StandardQuery};
//!
//! let query = Query::batch([
//!     StandardQuery::new("loch").into(),
//!     CommonParams { rows: Some(10), ..Default::default() }.into(),
//! ]);
//! assert_eq!(encode(&query).unwrap().as_str(), "q=loch&rows=10");
//! ```
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod component;
pub mod encoder;
pub mod facet;
pub mod group;
pub mod highlight;
pub mod plain;
pub mod query;
pub mod update;

pub use component::{MoreLikeThisParams, SpellCheckParams, SuggestParams};
pub use encoder::{encode, Encoded, Query};
pub use facet::{FacetInterval, FacetParams, FacetRange};
pub use group::{form_encode, Field, ParamGroup, Scope};
pub use highlight::{FastVectorHighlighter, Highlighter, HighlightParams, OriginalHighlighter, UnifiedHighlighter};
pub use plain::PlainParams;
pub use query::{CommonParams, DisMaxParams, StandardQuery};
pub use update::{UpdateDoc, UpdateParams};
