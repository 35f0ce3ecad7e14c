// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Turn raw aggregation buckets into facet lists.

use crate::models::aggregation::{FacetBucket, FacetName, Facets};
use serde_json::Value;

/// Read the six facet aggregations out of a response's `aggregations`
/// object. A missing or malformed aggregation yields an empty list for that
/// facet only. Bucket order is kept as delivered.
pub fn translate(aggregations: Option<&Value>) -> Facets {
    let mut facets = Facets::default();

    let Some(aggregations) = aggregations else {
        return facets;
    };

    for name in FacetName::ALL {
        if let Some(aggregation) = aggregations.get(name.aggregation_key()) {
            *facets.get_mut(name) = parse_buckets(aggregation);
        }
    }

    facets
}

fn parse_buckets(aggregation: &Value) -> Vec<FacetBucket> {
    aggregation
        .get("buckets")
        .and_then(Value::as_array)
        .map(|buckets| buckets.iter().map(parse_bucket).collect())
        .unwrap_or_default()
}

fn parse_bucket(bucket: &Value) -> FacetBucket {
    FacetBucket {
        key: bucket.get("key").map(bucket_key).unwrap_or_default(),
        count: bucket
            .get("doc_count")
            .and_then(Value::as_u64)
            .unwrap_or(0),
    }
}

/// Terms buckets carry string keys; histogram buckets carry numbers such as
/// `2014.0`, rendered here as `"2014"`.
fn bucket_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            (None, Some(f)) => f.to_string(),
            (None, None) => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
