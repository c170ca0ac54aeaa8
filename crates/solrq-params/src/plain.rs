//! Pass-through parameters with arbitrary keys.

use std::collections::{BTreeMap, HashMap};

use solrq_core::{ParamValue, Result};

use crate::group::{form_encode, Pair};

/// Arbitrary `key=value` parameters, emitted in insertion order.
///
/// Keys are opaque: `"q.op"` is sent as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainParams {
    entries: Vec<(String, ParamValue)>,
}

impl PlainParams {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn entries(&self) -> &[(String, ParamValue)] { &self.entries }

    pub fn is_empty(&self) -> bool { self.entries.iter().all(|(_, v)| v.is_empty()) }

    pub fn to_pairs(&self) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            pairs.extend(value.flatten()?.into_iter().map(|v| (key.clone(), v)));
        }
        Ok(pairs)
    }

    pub fn encode(&self) -> Result<String> { Ok(form_encode(&self.to_pairs()?)) }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for PlainParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> From<Vec<(K, V)>> for PlainParams {
    fn from(entries: Vec<(K, V)>) -> Self { entries.into_iter().collect() }
}

/// Sorted by key, so the output is stable.
impl<K: Into<String>, V: Into<ParamValue>> From<BTreeMap<K, V>> for PlainParams {
    fn from(map: BTreeMap<K, V>) -> Self { map.into_iter().collect() }
}

/// Hash maps have no order of their own; keys are sorted to keep output stable.
impl<V: Into<ParamValue>> From<HashMap<String, V>> for PlainParams {
    fn from(map: HashMap<String, V>) -> Self {
        let mut entries: Vec<(String, V)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().collect()
    }
}
