//! Dispatch from a parameter group to its wire form.
//!
//! [`Query`] is the closed set of shapes the encoder understands. Query-string
//! groups become `application/x-www-form-urlencoded` text; update groups
//! become a JSON body. The two never mix in one call.

use solrq_core::{Error, Result};

use crate::component::{MoreLikeThisParams, SpellCheckParams, SuggestParams};
use crate::facet::{FacetInterval, FacetParams, FacetRange};
use crate::group::{form_encode, Pair, ParamGroup};
use crate::highlight::HighlightParams;
use crate::plain::PlainParams;
use crate::query::{CommonParams, DisMaxParams, StandardQuery};
use crate::update::UpdateParams;

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Plain(PlainParams),
    Standard(StandardQuery),
    Common(CommonParams),
    DisMax(DisMaxParams),
    Facet(FacetParams),
    FacetRange(FacetRange),
    FacetInterval(FacetInterval),
    Highlight(HighlightParams),
    MoreLikeThis(MoreLikeThisParams),
    Suggest(SuggestParams),
    SpellCheck(SpellCheckParams),
    Update(UpdateParams),
    /// Groups encoded one after another and joined with `&`.
    Batch(Vec<Query>),
}

/// Output of [`encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    QueryString(String),
    Json(String),
}

impl Encoded {
    pub fn as_str(&self) -> &str {
        match self {
            Encoded::QueryString(s) | Encoded::Json(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Encoded::QueryString(s) | Encoded::Json(s) => s,
        }
    }
}

/// Encodes one group, or a batch of groups, into its exact wire form.
///
/// Fails with [`Error::UnsupportedInput`] without partial output when a batch
/// mixes an update with query-string groups or a value has no wire form.
pub fn encode(query: &Query) -> Result<Encoded> {
    match query.as_update() {
        Some(update) => update.to_json().map(Encoded::Json),
        None => query.to_query_string().map(Encoded::QueryString),
    }
}

impl Query {
    pub fn batch(queries: impl IntoIterator<Item = Query>) -> Self { Query::Batch(queries.into_iter().collect()) }

    /// The update group when this query is one, alone or as a batch of one.
    pub fn as_update(&self) -> Option<&UpdateParams> {
        match self {
            Query::Update(update) => Some(update),
            Query::Batch(items) if items.len() == 1 => items[0].as_update(),
            _ => None,
        }
    }

    pub fn is_update(&self) -> bool { self.as_update().is_some() }

    pub fn to_pairs(&self) -> Result<Vec<Pair>> {
        match self {
            Query::Plain(p) => p.to_pairs(),
            Query::Standard(q) => q.to_pairs(),
            Query::Common(q) => q.to_pairs(),
            Query::DisMax(q) => q.to_pairs(),
            Query::Facet(q) => q.to_pairs(),
            Query::FacetRange(q) => q.to_pairs(),
            Query::FacetInterval(q) => q.to_pairs(),
            Query::Highlight(q) => q.to_pairs(),
            Query::MoreLikeThis(q) => q.to_pairs(),
            Query::Suggest(q) => q.to_pairs(),
            Query::SpellCheck(q) => q.to_pairs(),
            Query::Update(_) => Err(Error::UnsupportedInput(
                "update parameters encode to a JSON body and cannot be mixed with query-string groups".to_string(),
            )),
            Query::Batch(items) => {
                let mut pairs = Vec::new();
                for item in items {
                    pairs.extend(item.to_pairs()?);
                }
                Ok(pairs)
            }
        }
    }

    pub fn to_query_string(&self) -> Result<String> { Ok(form_encode(&self.to_pairs()?)) }
}

macro_rules! query_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(impl From<$ty> for Query {
            fn from(value: $ty) -> Self { Query::$variant(value) }
        })*
    };
}

query_from!(
    Plain(PlainParams),
    Standard(StandardQuery),
    Common(CommonParams),
    DisMax(DisMaxParams),
    Facet(FacetParams),
    FacetRange(FacetRange),
    FacetInterval(FacetInterval),
    Highlight(HighlightParams),
    MoreLikeThis(MoreLikeThisParams),
    Suggest(SuggestParams),
    SpellCheck(SpellCheckParams),
    Update(UpdateParams),
    Batch(Vec<Query>),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_joins_groups_with_ampersand() {
        let query = Query::batch([
            StandardQuery::new("loch").into(),
            CommonParams { rows: Some(10), ..Default::default() }.into(),
        ]);
        assert_eq!(encode(&query).unwrap(), Encoded::QueryString("q=loch&rows=10".to_string()));
    }

    #[test]
    fn empty_members_do_not_leave_separators() {
        let query = Query::batch([
            CommonParams::default().into(),
            StandardQuery::new("x").into(),
            PlainParams::new().into(),
        ]);
        assert_eq!(query.to_query_string().unwrap(), "q=x");
    }

    #[test]
    fn update_alone_encodes_to_json() {
        let encoded = encode(&Query::Update(UpdateParams::commit())).unwrap();
        assert_eq!(encoded, Encoded::Json(r#"{"commit":{}}"#.to_string()));
        let single = encode(&Query::batch([UpdateParams::rollback().into()])).unwrap();
        assert_eq!(single.as_str(), r#"{"rollback":{}}"#);
    }

    #[test]
    fn update_mixed_with_query_groups_is_unsupported() {
        let query = Query::batch([StandardQuery::new("x").into(), UpdateParams::commit().into()]);
        assert!(matches!(encode(&query), Err(Error::UnsupportedInput(_))));
    }
}
