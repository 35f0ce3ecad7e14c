// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Facet aggregations: the fixed request sent with every search and the
//! compact facet lists returned to the UI.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

/// Size cap for terms aggregations
pub const DEFAULT_TERMS_SIZE: u32 = 100;

/// The six filterable dimensions exposed as facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetName {
    Rating,
    Country,
    Language,
    Year,
    Genre,
    Duration,
}

impl FacetName {
    pub const ALL: [FacetName; 6] = [
        FacetName::Rating,
        FacetName::Country,
        FacetName::Language,
        FacetName::Year,
        FacetName::Genre,
        FacetName::Duration,
    ];

    /// Name of the aggregation in the engine request and response.
    pub fn aggregation_key(&self) -> &'static str {
        match self {
            FacetName::Rating => "by_rating",
            FacetName::Country => "by_country",
            FacetName::Language => "by_language",
            FacetName::Year => "by_year",
            FacetName::Genre => "by_genre",
            FacetName::Duration => "by_duration",
        }
    }

    /// Aggregation definition used for this facet.
    pub fn aggregation(&self) -> Aggregation {
        match self {
            FacetName::Rating => Aggregation::histogram("users_rating"),
            FacetName::Country => Aggregation::terms("countries"),
            FacetName::Language => Aggregation::terms("languages.keyword"),
            FacetName::Year => Aggregation::histogram("year"),
            FacetName::Genre => Aggregation::terms("genre.keyword"),
            FacetName::Duration => Aggregation::histogram("runtime"),
        }
    }
}

impl std::fmt::Display for FacetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetName::Rating => write!(f, "rating"),
            FacetName::Country => write!(f, "country"),
            FacetName::Language => write!(f, "language"),
            FacetName::Year => write!(f, "year"),
            FacetName::Genre => write!(f, "genre"),
            FacetName::Duration => write!(f, "duration"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Terms(TermsAggregation),
    Histogram(HistogramAggregation),
}

impl Aggregation {
    fn terms(field: &str) -> Self {
        Aggregation::Terms(TermsAggregation {
            field: field.to_string(),
            size: DEFAULT_TERMS_SIZE,
        })
    }

    fn histogram(field: &str) -> Self {
        Aggregation::Histogram(HistogramAggregation {
            field: field.to_string(),
            interval: 1,
            min_doc_count: 1,
        })
    }
}

/// Bucket per distinct keyword value, ordered by descending count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermsAggregation {
    pub field: String,
    pub size: u32,
}

/// Fixed-width numeric buckets, ordered by ascending boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramAggregation {
    pub field: String,
    pub interval: u32,
    pub min_doc_count: u32,
}

/// The `aggs` section attached to every search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationSpec {
    pub by_rating: Aggregation,
    pub by_country: Aggregation,
    pub by_language: Aggregation,
    pub by_year: Aggregation,
    pub by_genre: Aggregation,
    pub by_duration: Aggregation,
}

impl AggregationSpec {
    pub fn build() -> Self {
        Self {
            by_rating: FacetName::Rating.aggregation(),
            by_country: FacetName::Country.aggregation(),
            by_language: FacetName::Language.aggregation(),
            by_year: FacetName::Year.aggregation(),
            by_genre: FacetName::Genre.aggregation(),
            by_duration: FacetName::Duration.aggregation(),
        }
    }
}

static AGGREGATIONS: LazyLock<AggregationSpec> = LazyLock::new(AggregationSpec::build);

/// Process-wide aggregation spec; identical for every request.
pub fn aggregation_spec() -> &'static AggregationSpec {
    &AGGREGATIONS
}

/// One facet value with its document count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FacetBucket {
    pub key: String,
    pub count: u64,
}

/// Facet lists per dimension, in the order the engine returned the buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Facets {
    pub rating: Vec<FacetBucket>,
    pub country: Vec<FacetBucket>,
    pub language: Vec<FacetBucket>,
    pub year: Vec<FacetBucket>,
    pub genre: Vec<FacetBucket>,
    pub duration: Vec<FacetBucket>,
}

impl Facets {
    pub fn get(&self, name: FacetName) -> &[FacetBucket] {
        match name {
            FacetName::Rating => &self.rating,
            FacetName::Country => &self.country,
            FacetName::Language => &self.language,
            FacetName::Year => &self.year,
            FacetName::Genre => &self.genre,
            FacetName::Duration => &self.duration,
        }
    }

    pub fn get_mut(&mut self, name: FacetName) -> &mut Vec<FacetBucket> {
        match name {
            FacetName::Rating => &mut self.rating,
            FacetName::Country => &mut self.country,
            FacetName::Language => &mut self.language,
            FacetName::Year => &mut self.year,
            FacetName::Genre => &mut self.genre,
            FacetName::Duration => &mut self.duration,
        }
    }
}
