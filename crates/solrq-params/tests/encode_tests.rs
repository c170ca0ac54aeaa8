use proptest::prelude::*;
use url::form_urlencoded;

use solrq_core::{Error, ParamValue};
use solrq_params::{
    encode, CommonParams, Encoded, FacetInterval, FacetParams, FacetRange, HighlightParams, Highlighter, PlainParams,
    Query, StandardQuery, SuggestParams, UnifiedHighlighter, UpdateParams,
};

fn decode(encoded: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(encoded.as_bytes()).into_owned().collect()
}

#[test]
fn plain_keyword_params() {
    let query: Query = PlainParams::new().with("q", "loch").with("rows", 10).into();
    assert_eq!(encode(&query).unwrap(), Encoded::QueryString("q=loch&rows=10".to_string()));
}

#[test]
fn common_params_filter_queries_in_declared_order() {
    // wt is written before fq here; output follows the table, not source order.
    let common = CommonParams {
        wt: Some("json".to_string()),
        fq: vec!["cat:book".to_string(), "inStock:true".to_string()],
        ..Default::default()
    };
    let query = Query::Common(common);
    assert_eq!(encode(&query).unwrap().as_str(), "fq=cat%3Abook&fq=inStock%3Atrue&wt=json");
}

#[test]
fn update_commit_with_options() {
    let update = UpdateParams { wait_searcher: Some(true), expunge_deletes: Some(false), ..UpdateParams::commit() };
    assert_eq!(
        encode(&Query::Update(update)).unwrap(),
        Encoded::Json(r#"{"commit":{"expungeDeletes":false,"waitSearcher":true}}"#.to_string())
    );
}

#[test]
fn facet_field_and_query() {
    let facet = FacetParams {
        field: vec!["type".to_string(), "year".to_string()],
        query: vec!["year:[2000 TO NOW]".to_string()],
        ..Default::default()
    };
    assert_eq!(
        encode(&facet.into()).unwrap().as_str(),
        "facet=true&facet.field=type&facet.field=year&facet.query=year%3A%5B2000+TO+NOW%5D"
    );
}

#[test]
fn delete_by_id_emits_one_entry_per_id_in_order() {
    let json = encode(&UpdateParams::delete_ids(["b", "a"]).into()).unwrap().into_string();
    assert_eq!(json, r#"{"delete":{"id":"b"},"delete":{"id":"a"}}"#);
}

#[test]
fn full_search_request() {
    let query = Query::batch([
        StandardQuery { df: Some("text".to_string()), ..StandardQuery::new("loch ness") }.into(),
        CommonParams { rows: Some(5), start: Some(10), fl: vec!["id".to_string(), "title".to_string()], ..Default::default() }.into(),
        FacetParams {
            field: vec!["genre".to_string()],
            range: vec![FacetRange::new("year", "1900", "2000", "+10YEARS")],
            ..Default::default()
        }
        .into(),
        HighlightParams::new(["title"]).into(),
        HighlightParams { snippets: Some(3), ..HighlightParams::for_field("title") }.into(),
    ]);
    assert_eq!(
        query.to_query_string().unwrap(),
        "q=loch+ness&df=text&fl=id&fl=title&start=10&rows=5\
         &facet=true&facet.field=genre\
         &facet.range=year&facet.range.start=1900&facet.range.end=2000&facet.range.gap=%2B10YEARS\
         &hl=true&hl.fl=title&hl=true&f.title.hl.snippets=3"
    );
}

#[test]
fn per_field_without_field_name_falls_back_to_global() {
    let range = FacetRange { range: None, start: Some("0".to_string()), per_field: true, ..Default::default() };
    assert_eq!(encode(&range.into()).unwrap().as_str(), "facet.range.start=0");
    let interval = FacetInterval { interval: Some(String::new()), set: vec!["[0,5]".to_string()], per_field: true };
    assert_eq!(encode(&interval.into()).unwrap().as_str(), "facet.interval.set=%5B0%2C5%5D");
}

#[test]
fn nested_list_in_plain_params_is_unsupported() {
    let nested = PlainParams::new().with("q", "x").with("fq", ParamValue::List(vec![ParamValue::List(vec!["a".into()])]));
    assert!(matches!(encode(&nested.into()), Err(Error::UnsupportedInput(_))));
}

#[test]
fn update_inside_larger_batch_is_unsupported() {
    let query = Query::batch([
        SuggestParams::new("ha").into(),
        Query::batch([UpdateParams::commit().into()]),
    ]);
    assert!(matches!(encode(&query), Err(Error::UnsupportedInput(_))));
}

fn opt_string() -> impl Strategy<Value = Option<String>> {
    prop::option::of("\\PC{0,12}")
}

prop_compose! {
    fn common_params()(
        fq in prop::collection::vec("\\PC{0,8}", 0..4),
        sort in opt_string(),
        rows in prop::option::of(0u64..1000),
        wt in opt_string(),
        cursor_mark in opt_string(),
    ) -> CommonParams {
        CommonParams { fq, sort, rows, wt, cursor_mark, ..Default::default() }
    }
}

fn text_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("\\PC{0,8}", 0..max)
}

prop_compose! {
    fn facet_range()(
        field in "[a-z]{0,6}",
        start in opt_string(),
        gap in opt_string(),
        other in text_list(3),
        method in opt_string(),
        per_field in any::<bool>(),
    ) -> FacetRange {
        FacetRange { range: Some(field), start, gap, other, method, per_field, ..Default::default() }
    }
}

prop_compose! {
    fn facet_interval()(
        field in "[a-z]{0,6}",
        set in text_list(4),
        per_field in any::<bool>(),
    ) -> FacetInterval {
        FacetInterval { interval: Some(field), set, per_field }
    }
}

prop_compose! {
    fn facet_params()(
        field in text_list(3),
        query in text_list(3),
        prefix in opt_string(),
        mincount in prop::option::of(0u64..100),
        range in prop::collection::vec(facet_range(), 0..3),
        interval in prop::collection::vec(facet_interval(), 0..3),
    ) -> FacetParams {
        FacetParams { field, query, prefix, mincount, range, interval, ..Default::default() }
    }
}

prop_compose! {
    fn highlight_params()(
        fl in text_list(3),
        field in "[a-z]{0,6}",
        per_field in any::<bool>(),
        snippets in prop::option::of(0u32..10),
        tag_pre in opt_string(),
        tag_ellipsis in opt_string(),
        unified in any::<bool>(),
    ) -> HighlightParams {
        let highlighter = unified.then(|| Highlighter::Unified(UnifiedHighlighter { tag_ellipsis, ..Default::default() }));
        HighlightParams { fl, field: Some(field), per_field, snippets, tag_pre, highlighter, ..Default::default() }
    }
}

fn query_groups() -> impl Strategy<Value = Query> {
    prop_oneof![
        common_params().prop_map(Query::Common),
        facet_params().prop_map(Query::Facet),
        facet_range().prop_map(Query::FacetRange),
        facet_interval().prop_map(Query::FacetInterval),
        highlight_params().prop_map(Query::Highlight),
    ]
}

proptest! {
    #[test]
    fn every_group_encodes_deterministically_and_round_trips(query in query_groups()) {
        let first = encode(&query).unwrap();
        let second = encode(&query).unwrap();
        prop_assert_eq!(&first, &second);
        let encoded = first.into_string();
        prop_assert_eq!(decode(&encoded), query.to_pairs().unwrap());
        prop_assert!(!encoded.ends_with('&'));
    }

    #[test]
    fn no_group_emits_an_empty_value(query in query_groups()) {
        let pairs = query.to_pairs().unwrap();
        prop_assert!(pairs.iter().all(|(k, v)| !k.is_empty() && !v.is_empty()));
    }

    #[test]
    fn facet_range_and_interval_embed_in_order(facet in facet_params()) {
        let own = FacetParams { range: vec![], interval: vec![], ..facet.clone() };
        let mut expected = Query::Facet(own).to_pairs().unwrap();
        for range in &facet.range {
            expected.extend(Query::FacetRange(range.clone()).to_pairs().unwrap());
        }
        for interval in &facet.interval {
            expected.extend(Query::FacetInterval(interval.clone()).to_pairs().unwrap());
        }
        prop_assert_eq!(Query::Facet(facet).to_pairs().unwrap(), expected);
    }

    #[test]
    fn per_field_scoping_applies_to_every_interval_set(field in "[a-z]{1,8}", set in text_list(4), per_field in any::<bool>()) {
        let interval = FacetInterval { interval: Some(field.clone()), set, per_field };
        for (key, _) in Query::FacetInterval(interval).to_pairs().unwrap() {
            if key == "facet.interval" {
                continue;
            }
            let expected = if per_field { format!("f.{}.facet.interval.set", field) } else { "facet.interval.set".to_string() };
            prop_assert_eq!(key, expected);
        }
    }

    #[test]
    fn per_field_highlighting_keeps_fl_and_method_global(hl in highlight_params()) {
        let scoped = hl.per_field && hl.field.as_deref().is_some_and(|f| !f.is_empty());
        let field = hl.field.clone().unwrap_or_default();
        for (key, _) in Query::Highlight(hl).to_pairs().unwrap() {
            if key == "hl" || key == "hl.fl" || key == "hl.method" {
                continue;
            }
            if scoped {
                prop_assert!(key.starts_with(&format!("f.{}.hl.", field)), "{}", key);
            } else {
                prop_assert!(key.starts_with("hl."), "{}", key);
            }
        }
    }

    #[test]
    fn encoding_is_deterministic(common in common_params()) {
        let first = encode(&Query::Common(common.clone())).unwrap();
        let second = encode(&Query::Common(common)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn round_trip_recovers_pairs(common in common_params()) {
        let query = Query::Common(common);
        let encoded = query.to_query_string().unwrap();
        prop_assert_eq!(decode(&encoded), query.to_pairs().unwrap());
        prop_assert!(!encoded.ends_with('&'));
    }

    #[test]
    fn empty_values_never_reach_output(common in common_params()) {
        let mut cleared = common.clone();
        cleared.sort = Some(String::new());
        cleared.wt = None;
        let pairs = Query::Common(cleared).to_pairs().unwrap();
        prop_assert!(pairs.iter().all(|(k, v)| k != "sort" && k != "wt" && !v.is_empty()));

        let expected: Vec<(String, String)> = Query::Common(common)
            .to_pairs()
            .unwrap()
            .into_iter()
            .filter(|(k, _)| k != "sort" && k != "wt")
            .collect();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn list_fields_expand_one_pair_per_non_empty_element(fq in prop::collection::vec("\\PC{0,8}", 0..6)) {
        let pairs = Query::Common(CommonParams { fq: fq.clone(), ..Default::default() }).to_pairs().unwrap();
        let expected: Vec<(String, String)> = fq
            .into_iter()
            .filter(|v| !v.is_empty())
            .map(|v| ("fq".to_string(), v))
            .collect();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn per_field_scoping_applies_to_every_range_option(field in "[a-z]{1,8}", per_field in any::<bool>()) {
        let range = FacetRange {
            hardend: Some(true),
            method: Some("dv".to_string()),
            per_field,
            ..FacetRange::new(field.clone(), "0", "10", "1")
        };
        for (key, _) in Query::FacetRange(range).to_pairs().unwrap() {
            if key == "facet.range" || key == "facet.range.method" {
                continue;
            }
            if per_field {
                prop_assert!(key.starts_with(&format!("f.{}.facet.range.", field)), "{}", key);
            } else {
                prop_assert!(key.starts_with("facet.range."), "{}", key);
            }
        }
    }
}
