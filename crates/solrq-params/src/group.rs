//! Field tables and the key-rewriting rules shared by every structured group.
//!
//! A group describes itself as an ordered table of [`Field`]s. The table
//! order is the output order. Each entry states how its key is scoped, so the
//! prefix rules live here in one place instead of in each group.

use solrq_core::{ParamValue, Result};
use url::form_urlencoded;

/// How a field's key is rewritten when the group carries a feature prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `<prefix>.<key>`, or `f.<field>.<prefix>.<key>` when rendered per field.
    Scoped,
    /// Always `<prefix>.<key>`.
    Global,
    /// The bare prefix itself, e.g. `facet.range=<field>`.
    Bare,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub value: ParamValue,
    pub scope: Scope,
}

impl Field {
    pub fn scoped(key: &'static str, value: impl Into<ParamValue>) -> Self {
        Self { key, value: value.into(), scope: Scope::Scoped }
    }

    pub fn global(key: &'static str, value: impl Into<ParamValue>) -> Self {
        Self { key, value: value.into(), scope: Scope::Global }
    }

    pub fn bare(key: &'static str, value: impl Into<ParamValue>) -> Self {
        Self { key, value: value.into(), scope: Scope::Bare }
    }

    pub fn render_key(&self, prefix: Option<&str>, per_field: Option<&str>) -> String {
        match (prefix, self.scope) {
            (None, _) => self.key.to_string(),
            (Some(p), Scope::Bare) => p.to_string(),
            (Some(p), Scope::Global) => format!("{}.{}", p, self.key),
            (Some(p), Scope::Scoped) => match per_field {
                Some(field) => format!("f.{}.{}.{}", field, p, self.key),
                None => format!("{}.{}", p, self.key),
            },
        }
    }
}

pub type Pair = (String, String);

/// A structured parameter group with a fixed, declared field set.
pub trait ParamGroup {
    /// Feature prefix applied to every key (`facet`, `hl`, `mlt`, ...).
    const PREFIX: Option<&'static str> = None;

    /// Emit `<prefix>=true` ahead of the fields.
    const TOGGLE: bool = false;

    /// The group's fields in output order.
    fn fields(&self) -> Vec<Field>;

    /// Field name for `f.<field>.` scoping, when per-field rendering applies.
    fn scoped_field(&self) -> Option<&str> { None }

    fn to_pairs(&self) -> Result<Vec<Pair>> { render_group(self) }

    fn encode(&self) -> Result<String> { Ok(form_encode(&self.to_pairs()?)) }
}

/// Turns a group's field table into ordered key/value pairs.
pub fn render_group<G: ParamGroup + ?Sized>(group: &G) -> Result<Vec<Pair>> {
    let mut pairs = Vec::new();
    if let (true, Some(prefix)) = (G::TOGGLE, G::PREFIX) {
        pairs.push((prefix.to_string(), "true".to_string()));
    }
    let scoped_field = group.scoped_field().filter(|f| !f.is_empty());
    for field in group.fields() {
        let values = field.value.flatten()?;
        if values.is_empty() {
            continue;
        }
        let key = field.render_key(G::PREFIX, scoped_field);
        pairs.extend(values.into_iter().map(|v| (key.clone(), v)));
    }
    Ok(pairs)
}

/// `application/x-www-form-urlencoded` join; no pairs gives the empty string.
pub fn form_encode(pairs: &[Pair]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}
