//! Document mutations: add, delete, commit, optimize, rollback.
//!
//! Update parameters encode to a JSON request body. The body is a sequence of
//! `"key":value` fragments wrapped in braces, because the update handler takes
//! repeated keys (one `"delete"` per id or query). Fragment order is fixed:
//! delete-by-query, delete-by-id, add, commit, optimize, rollback. A batch of
//! documents becomes one `"add"` entry per document, since the handler takes
//! a single object under `add.doc`.

use serde_json::Value;
use std::collections::BTreeMap;

use solrq_core::{Error, Result};

/// One document or a batch of them. Documents must be JSON objects.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateDoc {
    One(Value),
    Many(Vec<Value>),
}

impl UpdateDoc {
    fn is_empty(&self) -> bool {
        match self {
            UpdateDoc::One(doc) => doc.is_null(),
            UpdateDoc::Many(docs) => docs.is_empty(),
        }
    }

    /// The documents in order; one `add` entry is sent per document.
    fn docs(&self) -> Result<Vec<&Value>> {
        match self {
            UpdateDoc::One(doc) => Ok(vec![check_doc(doc)?]),
            UpdateDoc::Many(docs) => docs.iter().map(check_doc).collect(),
        }
    }
}

fn check_doc(doc: &Value) -> Result<&Value> {
    if doc.is_object() {
        Ok(doc)
    } else {
        Err(Error::UnsupportedInput(format!("update documents must be JSON objects, got {}", doc)))
    }
}

impl From<Value> for UpdateDoc {
    fn from(doc: Value) -> Self {
        match doc {
            Value::Array(docs) => UpdateDoc::Many(docs),
            doc => UpdateDoc::One(doc),
        }
    }
}

impl From<Vec<Value>> for UpdateDoc {
    fn from(docs: Vec<Value>) -> Self { UpdateDoc::Many(docs) }
}

/// A document mutation request.
///
/// Unset options are left out of the body; `Some(false)` is sent as `false`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateParams {
    pub doc: Option<UpdateDoc>,
    /// `commitWithin`, milliseconds. Applies to `add`.
    pub commit_within: Option<u64>,
    pub overwrite: Option<bool>,
    pub commit: Option<bool>,
    /// `waitSearcher`. Applies to `commit` and `optimize`.
    pub wait_searcher: Option<bool>,
    /// `expungeDeletes`. Applies to `commit`.
    pub expunge_deletes: Option<bool>,
    pub optimize: Option<bool>,
    /// `maxSegments`. Applies to `optimize`.
    pub max_segments: Option<u32>,
    pub rollback: Option<bool>,
    pub delete_id: Vec<String>,
    pub delete_query: Vec<String>,
}

impl UpdateParams {
    pub fn add(doc: impl Into<UpdateDoc>) -> Self { Self { doc: Some(doc.into()), ..Self::default() } }

    pub fn delete_ids<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self { delete_id: ids.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn delete_queries<S: Into<String>>(queries: impl IntoIterator<Item = S>) -> Self {
        Self { delete_query: queries.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn commit() -> Self { Self { commit: Some(true), ..Self::default() } }

    pub fn optimize() -> Self { Self { optimize: Some(true), ..Self::default() } }

    pub fn rollback() -> Self { Self { rollback: Some(true), ..Self::default() } }

    pub fn with_commit(mut self) -> Self {
        self.commit = Some(true);
        self
    }

    /// Encodes the request body.
    pub fn to_json(&self) -> Result<String> {
        let mut fragments = Vec::new();
        for query in self.delete_query.iter().filter(|q| !q.is_empty()) {
            fragments.push(fragment("delete", &object([("query", Value::from(query.as_str()))]))?);
        }
        for id in self.delete_id.iter().filter(|id| !id.is_empty()) {
            fragments.push(fragment("delete", &object([("id", Value::from(id.as_str()))]))?);
        }
        if let Some(doc) = self.doc.as_ref().filter(|d| !d.is_empty()) {
            for doc in doc.docs()? {
                let mut add = BTreeMap::new();
                add.insert("doc", doc.clone());
                set(&mut add, "commitWithin", self.commit_within.map(Value::from));
                set(&mut add, "overwrite", self.overwrite.map(Value::from));
                fragments.push(fragment("add", &add)?);
            }
        }
        if self.commit == Some(true) {
            let mut commit = BTreeMap::new();
            set(&mut commit, "waitSearcher", self.wait_searcher.map(Value::from));
            set(&mut commit, "expungeDeletes", self.expunge_deletes.map(Value::from));
            fragments.push(fragment("commit", &commit)?);
        }
        if self.optimize == Some(true) {
            let mut optimize = BTreeMap::new();
            set(&mut optimize, "waitSearcher", self.wait_searcher.map(Value::from));
            set(&mut optimize, "maxSegments", self.max_segments.map(Value::from));
            fragments.push(fragment("optimize", &optimize)?);
        }
        if self.rollback == Some(true) {
            fragments.push(fragment("rollback", &BTreeMap::<&str, Value>::new())?);
        }
        Ok(format!("{{{}}}", fragments.join(",")))
    }
}

fn object<const N: usize>(entries: [(&'static str, Value); N]) -> BTreeMap<&'static str, Value> {
    entries.into_iter().collect()
}

fn set(map: &mut BTreeMap<&'static str, Value>, key: &'static str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key, value);
    }
}

// BTreeMap keeps the sub-object keys sorted whatever serde_json features are on.
fn fragment(key: &str, value: &BTreeMap<&'static str, Value>) -> Result<String> {
    let body = serde_json::to_string(value).map_err(|e| Error::UnsupportedInput(e.to_string()))?;
    Ok(format!("\"{}\":{}", key, body))
}
