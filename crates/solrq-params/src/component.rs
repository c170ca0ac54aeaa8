//! Search components with a fixed feature prefix: more-like-this, suggester
//! and spellcheck. Each switches its component on with `<prefix>=true`.

use crate::group::{Field, ParamGroup};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoreLikeThisParams {
    pub fl: Vec<String>,
    pub mintf: Option<u32>,
    pub mindf: Option<u32>,
    pub maxdf: Option<u32>,
    pub maxdfpct: Option<u32>,
    pub minwl: Option<u32>,
    pub maxwl: Option<u32>,
    pub maxqt: Option<u32>,
    pub maxntp: Option<u32>,
    pub boost: Option<bool>,
    pub qf: Vec<String>,
    pub interesting_terms: Option<String>,
    /// `match.include`
    pub match_include: Option<bool>,
    /// `match.offset`
    pub match_offset: Option<u32>,
    pub count: Option<u32>,
}

impl MoreLikeThisParams {
    pub fn new<S: Into<String>>(fl: impl IntoIterator<Item = S>) -> Self {
        Self { fl: fl.into_iter().map(Into::into).collect(), ..Self::default() }
    }
}

impl ParamGroup for MoreLikeThisParams {
    const PREFIX: Option<&'static str> = Some("mlt");
    const TOGGLE: bool = true;

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("fl", self.fl.clone()),
            Field::scoped("mintf", self.mintf),
            Field::scoped("mindf", self.mindf),
            Field::scoped("maxdf", self.maxdf),
            Field::scoped("maxdfpct", self.maxdfpct),
            Field::scoped("minwl", self.minwl),
            Field::scoped("maxwl", self.maxwl),
            Field::scoped("maxqt", self.maxqt),
            Field::scoped("maxntp", self.maxntp),
            Field::scoped("boost", self.boost),
            Field::scoped("qf", self.qf.clone()),
            Field::scoped("interestingTerms", self.interesting_terms.clone()),
            Field::scoped("match.include", self.match_include),
            Field::scoped("match.offset", self.match_offset),
            Field::scoped("count", self.count),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestParams {
    pub dictionary: Vec<String>,
    pub q: Option<String>,
    pub count: Option<u32>,
    /// Context filter query.
    pub cfq: Option<String>,
    pub build: Option<bool>,
    pub reload: Option<bool>,
    pub build_all: Option<bool>,
    pub reload_all: Option<bool>,
}

impl SuggestParams {
    pub fn new(q: impl Into<String>) -> Self { Self { q: Some(q.into()), ..Self::default() } }
}

impl ParamGroup for SuggestParams {
    const PREFIX: Option<&'static str> = Some("suggest");
    const TOGGLE: bool = true;

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("dictionary", self.dictionary.clone()),
            Field::scoped("q", self.q.clone()),
            Field::scoped("count", self.count),
            Field::scoped("cfq", self.cfq.clone()),
            Field::scoped("build", self.build),
            Field::scoped("reload", self.reload),
            Field::scoped("buildAll", self.build_all),
            Field::scoped("reloadAll", self.reload_all),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpellCheckParams {
    pub q: Option<String>,
    pub dictionary: Vec<String>,
    pub count: Option<u32>,
    pub only_more_popular: Option<bool>,
    pub extended_results: Option<bool>,
    pub collate: Option<bool>,
    pub max_collations: Option<u32>,
    pub max_collation_tries: Option<u32>,
    pub max_collation_evaluations: Option<u32>,
    pub collate_extended_results: Option<bool>,
    pub collate_max_collect_docs: Option<u32>,
    pub accuracy: Option<f64>,
    pub alternative_term_count: Option<u32>,
    pub max_results_for_suggest: Option<u32>,
    pub build: Option<bool>,
    pub reload: Option<bool>,
}

impl ParamGroup for SpellCheckParams {
    const PREFIX: Option<&'static str> = Some("spellcheck");
    const TOGGLE: bool = true;

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("q", self.q.clone()),
            Field::scoped("dictionary", self.dictionary.clone()),
            Field::scoped("count", self.count),
            Field::scoped("onlyMorePopular", self.only_more_popular),
            Field::scoped("extendedResults", self.extended_results),
            Field::scoped("collate", self.collate),
            Field::scoped("maxCollations", self.max_collations),
            Field::scoped("maxCollationTries", self.max_collation_tries),
            Field::scoped("maxCollationEvaluations", self.max_collation_evaluations),
            Field::scoped("collateExtendedResults", self.collate_extended_results),
            Field::scoped("collateMaxCollectDocs", self.collate_max_collect_docs),
            Field::scoped("accuracy", self.accuracy),
            Field::scoped("alternativeTermCount", self.alternative_term_count),
            Field::scoped("maxResultsForSuggest", self.max_results_for_suggest),
            Field::scoped("build", self.build),
            Field::scoped("reload", self.reload),
        ]
    }
}
