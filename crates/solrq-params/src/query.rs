//! Querying groups: standard query parser, common parameters, (e)dismax.
//!
//! Keys are emitted verbatim, in the order the tables below declare them.

use crate::group::{Field, ParamGroup};

/// Standard (lucene) query parser parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardQuery {
    pub q: Option<String>,
    /// `q.op`
    pub q_op: Option<String>,
    pub df: Option<String>,
    pub sow: Option<bool>,
}

impl StandardQuery {
    pub fn new(q: impl Into<String>) -> Self { Self { q: Some(q.into()), ..Self::default() } }
}

impl ParamGroup for StandardQuery {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("q", self.q.clone()),
            Field::scoped("q.op", self.q_op.clone()),
            Field::scoped("df", self.df.clone()),
            Field::scoped("sow", self.sow),
        ]
    }
}

/// Parameters understood by every search handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonParams {
    pub fq: Vec<String>,
    pub fl: Vec<String>,
    pub sort: Option<String>,
    pub start: Option<u64>,
    pub rows: Option<u64>,
    pub def_type: Option<String>,
    pub time_allowed: Option<u64>,
    pub segment_terminate_early: Option<bool>,
    pub omit_header: Option<bool>,
    pub wt: Option<String>,
    pub cache: Option<bool>,
    pub log_params_list: Option<String>,
    pub echo_params: Option<String>,
    pub debug: Vec<String>,
    pub debug_query: Option<bool>,
    pub explain_other: Option<String>,
    pub cursor_mark: Option<String>,
    /// `json.nl`
    pub json_nl: Option<String>,
    /// `json.wrf`
    pub json_wrf: Option<String>,
    pub distrib: Option<bool>,
    pub shards: Option<String>,
    /// `shards.info`
    pub shards_info: Option<bool>,
    /// `shards.preference`
    pub shards_preference: Option<String>,
    /// `shards.tolerant`
    pub shards_tolerant: Option<bool>,
    pub collection: Option<String>,
    pub tr: Option<String>,
}

impl ParamGroup for CommonParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("fq", self.fq.clone()),
            Field::scoped("fl", self.fl.clone()),
            Field::scoped("sort", self.sort.clone()),
            Field::scoped("start", self.start),
            Field::scoped("rows", self.rows),
            Field::scoped("defType", self.def_type.clone()),
            Field::scoped("timeAllowed", self.time_allowed),
            Field::scoped("segmentTerminateEarly", self.segment_terminate_early),
            Field::scoped("omitHeader", self.omit_header),
            Field::scoped("wt", self.wt.clone()),
            Field::scoped("cache", self.cache),
            Field::scoped("logParamsList", self.log_params_list.clone()),
            Field::scoped("echoParams", self.echo_params.clone()),
            Field::scoped("debug", self.debug.clone()),
            Field::scoped("debugQuery", self.debug_query),
            Field::scoped("explainOther", self.explain_other.clone()),
            Field::scoped("cursorMark", self.cursor_mark.clone()),
            Field::scoped("json.nl", self.json_nl.clone()),
            Field::scoped("json.wrf", self.json_wrf.clone()),
            Field::scoped("distrib", self.distrib),
            Field::scoped("shards", self.shards.clone()),
            Field::scoped("shards.info", self.shards_info),
            Field::scoped("shards.preference", self.shards_preference.clone()),
            Field::scoped("shards.tolerant", self.shards_tolerant),
            Field::scoped("collection", self.collection.clone()),
            Field::scoped("tr", self.tr.clone()),
        ]
    }
}

/// DisMax / eDisMax relevance parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisMaxParams {
    pub q: Option<String>,
    /// `q.alt`
    pub q_alt: Option<String>,
    pub qf: Option<String>,
    pub mm: Option<String>,
    pub pf: Option<String>,
    pub ps: Option<u32>,
    pub qs: Option<u32>,
    pub tie: Option<f64>,
    pub bq: Vec<String>,
    pub bf: Vec<String>,
    pub uf: Option<String>,
    pub pf2: Option<String>,
    pub ps2: Option<u32>,
    pub pf3: Option<String>,
    pub ps3: Option<u32>,
    pub boost: Vec<String>,
    pub stopwords: Option<bool>,
    pub lowercase_operators: Option<bool>,
}

impl ParamGroup for DisMaxParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("q", self.q.clone()),
            Field::scoped("q.alt", self.q_alt.clone()),
            Field::scoped("qf", self.qf.clone()),
            Field::scoped("mm", self.mm.clone()),
            Field::scoped("pf", self.pf.clone()),
            Field::scoped("ps", self.ps),
            Field::scoped("qs", self.qs),
            Field::scoped("tie", self.tie),
            Field::scoped("bq", self.bq.clone()),
            Field::scoped("bf", self.bf.clone()),
            Field::scoped("uf", self.uf.clone()),
            Field::scoped("pf2", self.pf2.clone()),
            Field::scoped("ps2", self.ps2),
            Field::scoped("pf3", self.pf3.clone()),
            Field::scoped("ps3", self.ps3),
            Field::scoped("boost", self.boost.clone()),
            Field::scoped("stopwords", self.stopwords),
            Field::scoped("lowercaseOperators", self.lowercase_operators),
        ]
    }
}
