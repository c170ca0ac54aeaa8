//! Highlighting parameters and the highlighter-specific sub-forms.

use crate::group::{Field, ParamGroup};

/// Highlighting. Always sends `hl=true`.
///
/// Setting `per_field` with a `field` rewrites every key except `hl.fl` and
/// `hl.method` to `f.<field>.hl.<key>`, so several highlight groups can tune
/// different fields in one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightParams {
    pub fl: Vec<String>,
    pub method: Option<String>,
    pub q: Option<String>,
    pub qparser: Option<String>,
    pub require_field_match: Option<bool>,
    pub query_field_pattern: Vec<String>,
    pub use_phrase_highlighter: Option<bool>,
    pub highlight_multi_term: Option<bool>,
    pub snippets: Option<u32>,
    pub fragsize: Option<u32>,
    /// `tag.pre`
    pub tag_pre: Option<String>,
    /// `tag.post`
    pub tag_post: Option<String>,
    pub encoder: Option<String>,
    pub max_analyzed_chars: Option<u64>,
    pub field: Option<String>,
    pub per_field: bool,
    pub highlighter: Option<Highlighter>,
}

impl HighlightParams {
    pub fn new<S: Into<String>>(fl: impl IntoIterator<Item = S>) -> Self {
        Self { fl: fl.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Per-field tuning for `field`.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self { field: Some(field.into()), per_field: true, ..Self::default() }
    }
}

impl ParamGroup for HighlightParams {
    const PREFIX: Option<&'static str> = Some("hl");
    const TOGGLE: bool = true;

    fn fields(&self) -> Vec<Field> {
        let method = self.method.clone().or_else(|| self.highlighter.as_ref().map(|h| h.method().to_string()));
        let mut fields = vec![
            Field::global("fl", self.fl.clone()),
            Field::global("method", method),
            Field::scoped("q", self.q.clone()),
            Field::scoped("qparser", self.qparser.clone()),
            Field::scoped("requireFieldMatch", self.require_field_match),
            Field::scoped("queryFieldPattern", self.query_field_pattern.clone()),
            Field::scoped("usePhraseHighlighter", self.use_phrase_highlighter),
            Field::scoped("highlightMultiTerm", self.highlight_multi_term),
            Field::scoped("snippets", self.snippets),
            Field::scoped("fragsize", self.fragsize),
            Field::scoped("tag.pre", self.tag_pre.clone()),
            Field::scoped("tag.post", self.tag_post.clone()),
            Field::scoped("encoder", self.encoder.clone()),
            Field::scoped("maxAnalyzedChars", self.max_analyzed_chars),
        ];
        if let Some(highlighter) = &self.highlighter {
            fields.extend(highlighter.fields());
        }
        fields
    }

    fn scoped_field(&self) -> Option<&str> {
        if self.per_field { self.field.as_deref() } else { None }
    }
}

/// Options specific to one highlighter implementation. Its name is sent as
/// `hl.method` unless the group sets `method` itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Highlighter {
    Unified(UnifiedHighlighter),
    Original(OriginalHighlighter),
    FastVector(FastVectorHighlighter),
}

impl Highlighter {
    pub fn method(&self) -> &'static str {
        match self {
            Highlighter::Unified(_) => "unified",
            Highlighter::Original(_) => "original",
            Highlighter::FastVector(_) => "fastVector",
        }
    }

    fn fields(&self) -> Vec<Field> {
        match self {
            Highlighter::Unified(h) => h.fields(),
            Highlighter::Original(h) => h.fields(),
            Highlighter::FastVector(h) => h.fields(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedHighlighter {
    pub offset_source: Option<String>,
    /// `tag.ellipsis`
    pub tag_ellipsis: Option<String>,
    pub default_summary: Option<bool>,
    /// `score.k1`
    pub score_k1: Option<f64>,
    /// `score.b`
    pub score_b: Option<f64>,
    /// `score.pivot`
    pub score_pivot: Option<u64>,
    /// `bs.language`
    pub bs_language: Option<String>,
    /// `bs.country`
    pub bs_country: Option<String>,
    /// `bs.variant`
    pub bs_variant: Option<String>,
    /// `bs.type`
    pub bs_type: Option<String>,
    /// `bs.separator`
    pub bs_separator: Option<String>,
    pub weight_matches: Option<bool>,
}

impl UnifiedHighlighter {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("offsetSource", self.offset_source.clone()),
            Field::scoped("tag.ellipsis", self.tag_ellipsis.clone()),
            Field::scoped("defaultSummary", self.default_summary),
            Field::scoped("score.k1", self.score_k1),
            Field::scoped("score.b", self.score_b),
            Field::scoped("score.pivot", self.score_pivot),
            Field::scoped("bs.language", self.bs_language.clone()),
            Field::scoped("bs.country", self.bs_country.clone()),
            Field::scoped("bs.variant", self.bs_variant.clone()),
            Field::scoped("bs.type", self.bs_type.clone()),
            Field::scoped("bs.separator", self.bs_separator.clone()),
            Field::scoped("weightMatches", self.weight_matches),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginalHighlighter {
    pub merge_contiguous: Option<bool>,
    pub max_multi_valued_to_examine: Option<u64>,
    pub max_multi_valued_to_match: Option<u64>,
    pub alternate_field: Option<String>,
    pub max_alternate_field_length: Option<u64>,
    pub highlight_alternate: Option<bool>,
    pub formatter: Option<String>,
    /// `simple.pre`
    pub simple_pre: Option<String>,
    /// `simple.post`
    pub simple_post: Option<String>,
    pub fragmenter: Option<String>,
    /// `regex.slop`
    pub regex_slop: Option<f64>,
    /// `regex.pattern`
    pub regex_pattern: Option<String>,
    /// `regex.maxAnalyzedChars`
    pub regex_max_analyzed_chars: Option<u64>,
    pub preserve_multi: Option<bool>,
    pub payloads: Option<bool>,
}

impl OriginalHighlighter {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("mergeContiguous", self.merge_contiguous),
            Field::scoped("maxMultiValuedToExamine", self.max_multi_valued_to_examine),
            Field::scoped("maxMultiValuedToMatch", self.max_multi_valued_to_match),
            Field::scoped("alternateField", self.alternate_field.clone()),
            Field::scoped("maxAlternateFieldLength", self.max_alternate_field_length),
            Field::scoped("highlightAlternate", self.highlight_alternate),
            Field::scoped("formatter", self.formatter.clone()),
            Field::scoped("simple.pre", self.simple_pre.clone()),
            Field::scoped("simple.post", self.simple_post.clone()),
            Field::scoped("fragmenter", self.fragmenter.clone()),
            Field::scoped("regex.slop", self.regex_slop),
            Field::scoped("regex.pattern", self.regex_pattern.clone()),
            Field::scoped("regex.maxAnalyzedChars", self.regex_max_analyzed_chars),
            Field::scoped("preserveMulti", self.preserve_multi),
            Field::scoped("payloads", self.payloads),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FastVectorHighlighter {
    pub alternate_field: Option<String>,
    pub max_alternate_field_length: Option<u64>,
    pub highlight_alternate: Option<bool>,
    /// `tag.ellipsis`
    pub tag_ellipsis: Option<String>,
    pub frag_list_builder: Option<String>,
    pub fragments_builder: Option<String>,
    pub boundary_scanner: Option<String>,
    /// `bs.maxScan`
    pub bs_max_scan: Option<u32>,
    /// `bs.chars`
    pub bs_chars: Option<String>,
    /// `bs.type`
    pub bs_type: Option<String>,
    /// `bs.language`
    pub bs_language: Option<String>,
    /// `bs.country`
    pub bs_country: Option<String>,
    pub phrase_limit: Option<u32>,
    pub multi_valued_separator_char: Option<String>,
}

impl FastVectorHighlighter {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("alternateField", self.alternate_field.clone()),
            Field::scoped("maxAlternateFieldLength", self.max_alternate_field_length),
            Field::scoped("highlightAlternate", self.highlight_alternate),
            Field::scoped("tag.ellipsis", self.tag_ellipsis.clone()),
            Field::scoped("fragListBuilder", self.frag_list_builder.clone()),
            Field::scoped("fragmentsBuilder", self.fragments_builder.clone()),
            Field::scoped("boundaryScanner", self.boundary_scanner.clone()),
            Field::scoped("bs.maxScan", self.bs_max_scan),
            Field::scoped("bs.chars", self.bs_chars.clone()),
            Field::scoped("bs.type", self.bs_type.clone()),
            Field::scoped("bs.language", self.bs_language.clone()),
            Field::scoped("bs.country", self.bs_country.clone()),
            Field::scoped("phraseLimit", self.phrase_limit),
            Field::scoped("multiValuedSeparatorChar", self.multi_valued_separator_char.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_highlighting() {
        let hl = HighlightParams {
            snippets: Some(3),
            tag_pre: Some("<em>".to_string()),
            tag_post: Some("</em>".to_string()),
            ..HighlightParams::new(["title", "body"])
        };
        assert_eq!(
            hl.encode().unwrap(),
            "hl=true&hl.fl=title&hl.fl=body&hl.snippets=3&hl.tag.pre=%3Cem%3E&hl.tag.post=%3C%2Fem%3E"
        );
    }

    #[test]
    fn per_field_highlighting() {
        let hl = HighlightParams { snippets: Some(2), fragsize: Some(50), ..HighlightParams::for_field("title") };
        assert_eq!(hl.encode().unwrap(), "hl=true&f.title.hl.snippets=2&f.title.hl.fragsize=50");
    }

    #[test]
    fn highlighter_variant_sets_method_and_appends_options() {
        let hl = HighlightParams {
            highlighter: Some(Highlighter::Unified(UnifiedHighlighter {
                offset_source: Some("POSTINGS".to_string()),
                bs_type: Some("SENTENCE".to_string()),
                ..Default::default()
            })),
            ..HighlightParams::new(["body"])
        };
        assert_eq!(
            hl.encode().unwrap(),
            "hl=true&hl.fl=body&hl.method=unified&hl.offsetSource=POSTINGS&hl.bs.type=SENTENCE"
        );
    }

    #[test]
    fn explicit_method_wins_over_variant() {
        let hl = HighlightParams {
            method: Some("original".to_string()),
            highlighter: Some(Highlighter::FastVector(FastVectorHighlighter::default())),
            ..Default::default()
        };
        assert_eq!(hl.encode().unwrap(), "hl=true&hl.method=original");
    }

    #[test]
    fn per_field_variant_options_are_scoped() {
        let hl = HighlightParams {
            highlighter: Some(Highlighter::Original(OriginalHighlighter {
                alternate_field: Some("summary".to_string()),
                ..Default::default()
            })),
            ..HighlightParams::for_field("body")
        };
        assert_eq!(
            hl.encode().unwrap(),
            "hl=true&hl.method=original&f.body.hl.alternateField=summary"
        );
    }
}
