// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Boolean query expression sent to Elasticsearch.
//!
//! The tree is built once by the query compiler and never mutated. Each clause
//! serializes to the engine's query DSL shape, e.g. `{"term": {"year": 2014}}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level query: `{"bool": {...}}`.
///
/// "Match everything" is expressed by not sending a query at all, so there is
/// no empty variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub bool: BoolQuery,
}

/// Clause groups of a bool query.
///
/// All three groups are always serialized; an empty group means "no constraint
/// of this kind".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolQuery {
    /// Scored clauses (free-text matching)
    #[serde(default)]
    pub must: Vec<Clause>,
    /// Unscored, AND-combined clauses
    #[serde(default)]
    pub filter: Vec<Clause>,
    /// Unscored, OR-combined clauses
    #[serde(default)]
    pub should: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    MultiMatch(MultiMatch),
    Term(Term),
    Range(Range),
}

impl Clause {
    pub fn multi_match(query: impl Into<String>, fields: &[&str]) -> Self {
        Clause::MultiMatch(MultiMatch {
            query: query.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        })
    }

    pub fn term(field: impl Into<String>, value: impl Into<TermValue>) -> Self {
        Clause::Term(Term {
            field: field.into(),
            value: value.into(),
        })
    }

    /// Range clause on `field`, or `None` when neither bound is given.
    pub fn range(field: impl Into<String>, gte: Option<f64>, lte: Option<f64>) -> Option<Self> {
        RangeBounds::new(gte, lte).map(|bounds| {
            Clause::Range(Range {
                field: field.into(),
                bounds,
            })
        })
    }
}

/// Full-text match across several (optionally boosted, `title^2`) fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiMatch {
    pub query: String,
    pub fields: Vec<String>,
}

/// Exact match of a single keyword or numeric field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, TermValue>",
    into = "BTreeMap<String, TermValue>"
)]
pub struct Term {
    pub field: String,
    pub value: TermValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermValue {
    Text(String),
    Integer(i64),
}

impl From<&str> for TermValue {
    fn from(value: &str) -> Self {
        TermValue::Text(value.to_string())
    }
}

impl From<String> for TermValue {
    fn from(value: String) -> Self {
        TermValue::Text(value)
    }
}

impl From<i64> for TermValue {
    fn from(value: i64) -> Self {
        TermValue::Integer(value)
    }
}

impl From<Term> for BTreeMap<String, TermValue> {
    fn from(term: Term) -> Self {
        BTreeMap::from([(term.field, term.value)])
    }
}

impl TryFrom<BTreeMap<String, TermValue>> for Term {
    type Error = String;

    fn try_from(map: BTreeMap<String, TermValue>) -> Result<Self, Self::Error> {
        let (field, value) = single_entry(map, "term")?;
        Ok(Term { field, value })
    }
}

/// Inclusive numeric range on a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, RangeBounds>",
    into = "BTreeMap<String, RangeBounds>"
)]
pub struct Range {
    pub field: String,
    pub bounds: RangeBounds,
}

impl From<Range> for BTreeMap<String, RangeBounds> {
    fn from(range: Range) -> Self {
        BTreeMap::from([(range.field, range.bounds)])
    }
}

impl TryFrom<BTreeMap<String, RangeBounds>> for Range {
    type Error = String;

    fn try_from(map: BTreeMap<String, RangeBounds>) -> Result<Self, Self::Error> {
        let (field, bounds) = single_entry(map, "range")?;
        if bounds.gte.is_none() && bounds.lte.is_none() {
            return Err(format!("range on '{field}' has no bounds"));
        }
        Ok(Range { field, bounds })
    }
}

/// Lower/upper bounds of a range clause. At least one finite bound is always
/// present when built through [`RangeBounds::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
}

impl RangeBounds {
    /// Non-finite bounds (NaN, infinity) count as absent.
    pub fn new(gte: Option<f64>, lte: Option<f64>) -> Option<Self> {
        let gte = gte.filter(|v| v.is_finite());
        let lte = lte.filter(|v| v.is_finite());
        match (gte, lte) {
            (None, None) => None,
            (gte, lte) => Some(Self { gte, lte }),
        }
    }
}

fn single_entry<V>(map: BTreeMap<String, V>, clause: &str) -> Result<(String, V), String> {
    if map.len() != 1 {
        return Err(format!(
            "{clause} clause must name exactly one field, got {}",
            map.len()
        ));
    }
    map.into_iter()
        .next()
        .ok_or_else(|| format!("{clause} clause is empty"))
}
