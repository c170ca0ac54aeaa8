//! Search and update operations over a [`Transport`].
//!
//! The client encodes, builds the URL, makes exactly one call and hands the
//! response back unchanged. Decoding the body is left to the caller.

use tracing::{debug, info};

use solrq_core::config::SolrqConfig;
use solrq_core::traits::Transport;
use solrq_core::types::Response;
use solrq_core::{Error, Result};
use solrq_params::{
    CommonParams, MoreLikeThisParams, Query, SpellCheckParams, StandardQuery, SuggestParams, UpdateDoc,
    UpdateParams,
};

use crate::endpoint::{resolve, Endpoint, EndpointRef};
use crate::transport::HttpTransport;

pub const SELECT_HANDLER: &str = "select";
pub const SUGGEST_HANDLER: &str = "suggest";
pub const UPDATE_HANDLER: &str = "update";

/// The everyday search: query text plus paging, filters, fields and sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickQuery {
    pub q: String,
    pub rows: Option<u64>,
    pub start: Option<u64>,
    pub filters: Vec<String>,
    pub fields: Vec<String>,
    pub sort: Option<String>,
}

impl QuickQuery {
    pub fn new(q: impl Into<String>) -> Self { Self { q: q.into(), ..Self::default() } }

    pub fn to_query(&self) -> Query {
        Query::batch([
            StandardQuery::new(self.q.clone()).into(),
            CommonParams {
                fq: self.filters.clone(),
                fl: self.fields.clone(),
                sort: self.sort.clone(),
                start: self.start,
                rows: self.rows,
                ..CommonParams::default()
            }
            .into(),
        ])
    }
}

pub struct SolrClient<T: Transport = HttpTransport> {
    config: SolrqConfig,
    transport: T,
}

impl SolrClient<HttpTransport> {
    pub fn new(config: SolrqConfig) -> Result<Self> { Ok(Self::with_transport(config, HttpTransport::new()?)) }
}

impl<T: Transport> SolrClient<T> {
    pub fn with_transport(config: SolrqConfig, transport: T) -> Self { Self { config, transport } }

    pub fn config(&self) -> &SolrqConfig { &self.config }

    pub fn transport(&self) -> &T { &self.transport }

    pub fn resolve(&self, endpoint: impl Into<EndpointRef>) -> Result<Endpoint> {
        resolve(&self.config, &endpoint.into())
    }

    /// GET `<url>/<handler>?<encoded query>`.
    ///
    /// `None` is reported as [`Error::EmptyQuery`] and nothing is sent.
    pub fn search(&self, endpoint: impl Into<EndpointRef>, query: Option<&Query>) -> Result<Response> {
        let query = query.ok_or(Error::EmptyQuery)?;
        self.get(endpoint, SELECT_HANDLER, query)
    }

    pub fn q(&self, endpoint: impl Into<EndpointRef>, quick: &QuickQuery) -> Result<Response> {
        self.search(endpoint, Some(&quick.to_query()))
    }

    /// Sent to the `suggest` handler unless the endpoint names its own.
    pub fn suggest(&self, endpoint: impl Into<EndpointRef>, suggest: &SuggestParams) -> Result<Response> {
        self.get(endpoint, SUGGEST_HANDLER, &Query::Suggest(suggest.clone()))
    }

    pub fn spellcheck(
        &self,
        endpoint: impl Into<EndpointRef>,
        q: &str,
        spellcheck: &SpellCheckParams,
    ) -> Result<Response> {
        let query = Query::batch([StandardQuery::new(q).into(), spellcheck.clone().into()]);
        self.search(endpoint, Some(&query))
    }

    pub fn mlt(&self, endpoint: impl Into<EndpointRef>, query: Query, mlt: &MoreLikeThisParams) -> Result<Response> {
        self.search(endpoint, Some(&Query::batch([query, mlt.clone().into()])))
    }

    /// POST the update body to `<url>/update` (or the endpoint's handler).
    pub fn update(&self, endpoint: impl Into<EndpointRef>, update: &UpdateParams) -> Result<Response> {
        let endpoint = self.resolve(endpoint)?;
        let body = update.to_json()?;
        let request = endpoint.request(UPDATE_HANDLER, "").with_body(body);
        info!(url = %request.url, "sending update");
        self.transport.post(&request)
    }

    pub fn add_docs(&self, endpoint: impl Into<EndpointRef>, docs: impl Into<UpdateDoc>, commit: bool) -> Result<Response> {
        self.update(endpoint, &with_commit(UpdateParams::add(docs), commit))
    }

    pub fn delete_by_id<S: Into<String>>(
        &self,
        endpoint: impl Into<EndpointRef>,
        ids: impl IntoIterator<Item = S>,
        commit: bool,
    ) -> Result<Response> {
        self.update(endpoint, &with_commit(UpdateParams::delete_ids(ids), commit))
    }

    pub fn delete_by_query<S: Into<String>>(
        &self,
        endpoint: impl Into<EndpointRef>,
        queries: impl IntoIterator<Item = S>,
        commit: bool,
    ) -> Result<Response> {
        self.update(endpoint, &with_commit(UpdateParams::delete_queries(queries), commit))
    }

    pub fn commit(&self, endpoint: impl Into<EndpointRef>) -> Result<Response> {
        self.update(endpoint, &UpdateParams::commit())
    }

    pub fn optimize(&self, endpoint: impl Into<EndpointRef>) -> Result<Response> {
        self.update(endpoint, &UpdateParams::optimize())
    }

    pub fn rollback(&self, endpoint: impl Into<EndpointRef>) -> Result<Response> {
        self.update(endpoint, &UpdateParams::rollback())
    }

    fn get(&self, endpoint: impl Into<EndpointRef>, default_handler: &str, query: &Query) -> Result<Response> {
        if query.is_update() {
            return Err(Error::UnsupportedInput("update parameters must be sent with update()".to_string()));
        }
        // Encoding errors surface before endpoint resolution.
        let encoded = query.to_query_string()?;
        let endpoint = self.resolve(endpoint)?;
        let request = endpoint.request(default_handler, &encoded);
        debug!(url = %request.url, "sending search");
        self.transport.get(&request)
    }
}

fn with_commit(update: UpdateParams, commit: bool) -> UpdateParams {
    if commit { update.with_commit() } else { update }
}
