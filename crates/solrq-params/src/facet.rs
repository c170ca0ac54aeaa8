//! Faceting: field/query facets plus embedded range and interval facets.

use solrq_core::Result;

use crate::group::{render_group, Field, Pair, ParamGroup};

/// Field, query and pivot faceting. Always sends `facet=true`.
///
/// Embedded [`FacetRange`] and [`FacetInterval`] values are rendered after
/// the group's own fields, each in full and in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetParams {
    pub field: Vec<String>,
    pub query: Vec<String>,
    pub pivot: Vec<String>,
    /// `pivot.mincount`
    pub pivot_mincount: Option<u64>,
    pub prefix: Option<String>,
    pub contains: Option<String>,
    /// `contains.ignoreCase`
    pub contains_ignore_case: Option<bool>,
    pub matches: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<u64>,
    pub mincount: Option<u64>,
    pub missing: Option<bool>,
    pub method: Option<String>,
    /// `enum.cache.minDf`
    pub enum_cache_min_df: Option<u64>,
    pub exists: Option<bool>,
    pub exclude_terms: Option<String>,
    /// `overrequest.count`
    pub overrequest_count: Option<u64>,
    /// `overrequest.ratio`
    pub overrequest_ratio: Option<f64>,
    pub threads: Option<i64>,
    pub range: Vec<FacetRange>,
    pub interval: Vec<FacetInterval>,
}

impl ParamGroup for FacetParams {
    const PREFIX: Option<&'static str> = Some("facet");
    const TOGGLE: bool = true;

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::scoped("field", self.field.clone()),
            Field::scoped("query", self.query.clone()),
            Field::scoped("pivot", self.pivot.clone()),
            Field::scoped("pivot.mincount", self.pivot_mincount),
            Field::scoped("prefix", self.prefix.clone()),
            Field::scoped("contains", self.contains.clone()),
            Field::scoped("contains.ignoreCase", self.contains_ignore_case),
            Field::scoped("matches", self.matches.clone()),
            Field::scoped("sort", self.sort.clone()),
            Field::scoped("limit", self.limit),
            Field::scoped("offset", self.offset),
            Field::scoped("mincount", self.mincount),
            Field::scoped("missing", self.missing),
            Field::scoped("method", self.method.clone()),
            Field::scoped("enum.cache.minDf", self.enum_cache_min_df),
            Field::scoped("exists", self.exists),
            Field::scoped("excludeTerms", self.exclude_terms.clone()),
            Field::scoped("overrequest.count", self.overrequest_count),
            Field::scoped("overrequest.ratio", self.overrequest_ratio),
            Field::scoped("threads", self.threads),
        ]
    }

    fn to_pairs(&self) -> Result<Vec<Pair>> {
        let mut pairs = render_group(self)?;
        for range in &self.range {
            pairs.extend(range.to_pairs()?);
        }
        for interval in &self.interval {
            pairs.extend(interval.to_pairs()?);
        }
        Ok(pairs)
    }
}

/// One range facet. `range` names the field being faceted.
///
/// With `per_field`, every key except `facet.range` and
/// `facet.range.method` becomes `f.<range>.facet.range.<key>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetRange {
    pub range: Option<String>,
    /// Plain strings so date math such as `NOW/YEAR-10YEARS` passes through.
    pub start: Option<String>,
    pub end: Option<String>,
    pub gap: Option<String>,
    pub hardend: Option<bool>,
    pub include: Vec<String>,
    pub other: Vec<String>,
    pub method: Option<String>,
    pub per_field: bool,
}

impl FacetRange {
    pub fn new(
        range: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        gap: impl Into<String>,
    ) -> Self {
        Self {
            range: Some(range.into()),
            start: Some(start.into()),
            end: Some(end.into()),
            gap: Some(gap.into()),
            ..Self::default()
        }
    }
}

impl ParamGroup for FacetRange {
    const PREFIX: Option<&'static str> = Some("facet.range");

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::bare("range", self.range.clone()),
            Field::scoped("start", self.start.clone()),
            Field::scoped("end", self.end.clone()),
            Field::scoped("gap", self.gap.clone()),
            Field::scoped("hardend", self.hardend),
            Field::scoped("include", self.include.clone()),
            Field::scoped("other", self.other.clone()),
            Field::global("method", self.method.clone()),
        ]
    }

    fn scoped_field(&self) -> Option<&str> {
        if self.per_field { self.range.as_deref() } else { None }
    }
}

/// One interval facet over `interval`, with its `set` of interval specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetInterval {
    pub interval: Option<String>,
    pub set: Vec<String>,
    pub per_field: bool,
}

impl FacetInterval {
    pub fn new<S: Into<String>>(interval: impl Into<String>, set: impl IntoIterator<Item = S>) -> Self {
        Self {
            interval: Some(interval.into()),
            set: set.into_iter().map(Into::into).collect(),
            per_field: false,
        }
    }
}

impl ParamGroup for FacetInterval {
    const PREFIX: Option<&'static str> = Some("facet.interval");

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::bare("interval", self.interval.clone()),
            Field::scoped("set", self.set.clone()),
        ]
    }

    fn scoped_field(&self) -> Option<&str> {
        if self.per_field { self.interval.as_deref() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_fields_and_queries() {
        let facet = FacetParams {
            field: vec!["type".to_string(), "year".to_string()],
            query: vec!["year:[2000 TO NOW]".to_string()],
            ..Default::default()
        };
        assert_eq!(
            facet.encode().unwrap(),
            "facet=true&facet.field=type&facet.field=year&facet.query=year%3A%5B2000+TO+NOW%5D"
        );
    }

    #[test]
    fn empty_facet_still_switches_faceting_on() {
        assert_eq!(FacetParams::default().encode().unwrap(), "facet=true");
    }

    #[test]
    fn range_global_form() {
        let range = FacetRange { method: Some("dv".to_string()), ..FacetRange::new("year", "1700", "1799", "+10YEARS") };
        assert_eq!(
            range.encode().unwrap(),
            "facet.range=year&facet.range.start=1700&facet.range.end=1799\
             &facet.range.gap=%2B10YEARS&facet.range.method=dv"
        );
    }

    #[test]
    fn range_per_field_form_keeps_field_and_method_global() {
        let range = FacetRange {
            method: Some("filter".to_string()),
            other: vec!["before".to_string(), "after".to_string()],
            per_field: true,
            ..FacetRange::new("year", "1700", "1799", "+10YEARS")
        };
        assert_eq!(
            range.encode().unwrap(),
            "facet.range=year&f.year.facet.range.start=1700&f.year.facet.range.end=1799\
             &f.year.facet.range.gap=%2B10YEARS&f.year.facet.range.other=before\
             &f.year.facet.range.other=after&facet.range.method=filter"
        );
    }

    #[test]
    fn interval_per_field_form() {
        let interval = FacetInterval { per_field: true, ..FacetInterval::new("price", ["[0,10]", "(10,100]"]) };
        assert_eq!(
            interval.encode().unwrap(),
            "facet.interval=price&f.price.facet.interval.set=%5B0%2C10%5D\
             &f.price.facet.interval.set=%2810%2C100%5D"
        );
    }

    #[test]
    fn facet_embeds_ranges_and_intervals_in_order() {
        let facet = FacetParams {
            field: vec!["type".to_string()],
            range: vec![
                FacetRange::new("year", "2000", "2020", "+5YEARS"),
                FacetRange { per_field: true, ..FacetRange::new("price", "0", "100", "10") },
            ],
            interval: vec![FacetInterval::new("rating", ["[1,3)"])],
            ..Default::default()
        };
        assert_eq!(
            facet.encode().unwrap(),
            "facet=true&facet.field=type\
             &facet.range=year&facet.range.start=2000&facet.range.end=2020&facet.range.gap=%2B5YEARS\
             &facet.range=price&f.price.facet.range.start=0&f.price.facet.range.end=100&f.price.facet.range.gap=10\
             &facet.interval=rating&facet.interval.set=%5B1%2C3%29"
        );
    }
}
