// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Translate a [`SearchRequest`] into an Elasticsearch bool query plus paging.

use crate::models::movie::SearchRequest;
use crate::models::query::{BoolQuery, Clause, Query};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Fields searched by free text; title matches weigh double.
pub const TEXT_FIELDS: [&str; 5] = ["title^2", "description", "actors", "directors", "genre"];

pub const COUNTRY_FIELD: &str = "countries";
pub const RATING_FIELD: &str = "users_rating";
pub const LANGUAGE_FIELD: &str = "languages.keyword";
pub const YEAR_FIELD: &str = "year";
pub const GENRE_FIELD: &str = "genre.keyword";
pub const DURATION_FIELD: &str = "runtime";

/// Known issue: the country filter ignores the requested value and always
/// matches this one. Kept until product confirms the intended behavior.
pub const PINNED_COUNTRY: &str = "Canada";

/// Output of [`compile`]. `query: None` matches the whole index.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSearch {
    pub query: Option<Query>,
    pub from: u64,
    pub size: u64,
}

pub fn compile(request: &SearchRequest) -> CompiledSearch {
    let (from, size) = pagination(request);

    if request.is_unfiltered() {
        return CompiledSearch {
            query: None,
            from,
            size,
        };
    }

    CompiledSearch {
        query: Some(Query {
            bool: build_bool(request),
        }),
        from,
        size,
    }
}

fn pagination(request: &SearchRequest) -> (u64, u64) {
    let size = request
        .limit
        .filter(|&limit| limit > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let from = request
        .page
        .filter(|&page| page > 0)
        .map_or(0, |page| page.saturating_mul(size));
    (from, size)
}

fn build_bool(request: &SearchRequest) -> BoolQuery {
    let must = present(&request.search_text)
        .map(|text| Clause::multi_match(text, &TEXT_FIELDS))
        .into_iter()
        .collect();

    let filter = [
        present(&request.country).map(|_| Clause::term(COUNTRY_FIELD, PINNED_COUNTRY)),
        Clause::range(RATING_FIELD, request.rating_min, request.rating_max),
        present(&request.language).map(|language| Clause::term(LANGUAGE_FIELD, language)),
        request.year.map(|year| Clause::term(YEAR_FIELD, year)),
        Clause::range(DURATION_FIELD, request.duration_min, request.duration_max),
    ]
    .into_iter()
    .flatten()
    .collect();

    // Any requested genre qualifies a movie, so genres go into `should`
    let should = request
        .genre
        .iter()
        .map(|genre| Clause::term(GENRE_FIELD, genre.as_str()))
        .collect();

    BoolQuery {
        must,
        filter,
        should,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::{RangeBounds, TermValue};
    use serde_json::json;

    fn request() -> SearchRequest {
        SearchRequest::default()
    }

    fn bool_of(request: &SearchRequest) -> BoolQuery {
        compile(request).query.expect("expected a query").bool
    }

    #[test]
    fn test_unfiltered_request_has_no_query() {
        let compiled = compile(&request());
        assert_eq!(
            compiled,
            CompiledSearch {
                query: None,
                from: 0,
                size: 10
            }
        );
    }

    #[test]
    fn test_blank_fields_and_paging_still_match_all() {
        let compiled = compile(&SearchRequest {
            search_text: Some(String::new()),
            country: Some("  ".to_string()),
            genre: vec![],
            page: Some(2),
            limit: Some(5),
            ..request()
        });
        assert!(compiled.query.is_none());
        assert_eq!((compiled.from, compiled.size), (10, 5));
    }

    #[test]
    fn test_pagination() {
        let paged = |page, limit| {
            let compiled = compile(&SearchRequest {
                page,
                limit,
                ..request()
            });
            (compiled.from, compiled.size)
        };
        assert_eq!(paged(Some(2), Some(5)), (10, 5));
        assert_eq!(paged(Some(3), None), (30, 10));
        assert_eq!(paged(None, Some(25)), (0, 25));
        assert_eq!(paged(Some(0), Some(0)), (0, 10));
    }

    #[test]
    fn test_text_goes_to_must() {
        let query = bool_of(&SearchRequest {
            search_text: Some("interstellar".to_string()),
            ..request()
        });
        assert_eq!(
            query.must,
            vec![Clause::multi_match(
                "interstellar",
                &["title^2", "description", "actors", "directors", "genre"]
            )]
        );
        assert!(query.filter.is_empty());
        assert!(query.should.is_empty());
    }

    #[test]
    fn test_rating_min_only() {
        let query = bool_of(&SearchRequest {
            rating_min: Some(6.0),
            ..request()
        });
        assert!(query.must.is_empty());
        assert_eq!(
            serde_json::to_value(&query.filter).unwrap(),
            json!([{"range": {"users_rating": {"gte": 6.0}}}])
        );
    }

    #[test]
    fn test_rating_max_only() {
        let query = bool_of(&SearchRequest {
            rating_max: Some(9.0),
            ..request()
        });
        assert_eq!(
            query.filter,
            vec![Clause::range("users_rating", None, Some(9.0)).unwrap()]
        );
    }

    #[test]
    fn test_rating_both_bounds_in_one_clause() {
        let query = bool_of(&SearchRequest {
            rating_min: Some(6.0),
            rating_max: Some(9.0),
            ..request()
        });
        assert_eq!(
            serde_json::to_value(&query.filter).unwrap(),
            json!([{"range": {"users_rating": {"gte": 6.0, "lte": 9.0}}}])
        );
    }

    #[test]
    fn test_zero_duration_bound_is_kept() {
        let query = bool_of(&SearchRequest {
            duration_min: Some(0.0),
            ..request()
        });
        match &query.filter[..] {
            [Clause::Range(range)] => {
                assert_eq!(range.field, "runtime");
                assert_eq!(range.bounds, RangeBounds::new(Some(0.0), None).unwrap());
            }
            other => panic!("unexpected filter: {other:?}"),
        }
    }

    #[test]
    fn test_genres_go_to_should() {
        let query = bool_of(&SearchRequest {
            genre: vec!["Adventure".to_string(), "Drama".to_string()],
            year: Some(2014),
            ..request()
        });
        assert_eq!(
            query.should,
            vec![
                Clause::term("genre.keyword", "Adventure"),
                Clause::term("genre.keyword", "Drama"),
            ]
        );
        assert_eq!(query.filter, vec![Clause::term("year", 2014_i64)]);
    }

    #[test]
    fn test_country_filter_is_pinned() {
        let query = bool_of(&SearchRequest {
            country: Some("France".to_string()),
            ..request()
        });
        assert_eq!(query.filter, vec![Clause::term("countries", "Canada")]);
    }

    #[test]
    fn test_language_and_year_terms() {
        let query = bool_of(&SearchRequest {
            language: Some("English".to_string()),
            year: Some(2014),
            ..request()
        });
        match &query.filter[..] {
            [Clause::Term(language), Clause::Term(year)] => {
                assert_eq!(language.field, "languages.keyword");
                assert_eq!(language.value, TermValue::Text("English".to_string()));
                assert_eq!(year.field, "year");
                assert_eq!(year.value, TermValue::Integer(2014));
            }
            other => panic!("unexpected filter: {other:?}"),
        }
    }

    #[test]
    fn test_full_request_clause_order() {
        let query = bool_of(&SearchRequest {
            search_text: Some("interstellar".to_string()),
            country: Some("Canada".to_string()),
            rating_min: Some(6.0),
            rating_max: Some(9.0),
            language: Some("English".to_string()),
            year: Some(2014),
            genre: vec!["Adventure".to_string()],
            duration_min: Some(2.0),
            duration_max: Some(3.0),
            page: None,
            limit: None,
        });

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "must": [{"multi_match": {
                    "query": "interstellar",
                    "fields": ["title^2", "description", "actors", "directors", "genre"]
                }}],
                "filter": [
                    {"term": {"countries": "Canada"}},
                    {"range": {"users_rating": {"gte": 6.0, "lte": 9.0}}},
                    {"term": {"languages.keyword": "English"}},
                    {"term": {"year": 2014}},
                    {"range": {"runtime": {"gte": 2.0, "lte": 3.0}}}
                ],
                "should": [{"term": {"genre.keyword": "Adventure"}}]
            })
        );
    }

    #[test]
    fn test_compiled_query_round_trips() {
        let compiled = compile(&SearchRequest {
            search_text: Some("space".to_string()),
            rating_min: Some(7.5),
            genre: vec!["Sci-Fi".to_string(), "Drama".to_string()],
            duration_max: Some(2.5),
            year: Some(1968),
            ..request()
        });
        let query = compiled.query.unwrap();
        let text = serde_json::to_string(&query).unwrap();
        let parsed: Query = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, query);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), text);
    }

    #[test]
    fn test_nan_bounds_do_not_reach_the_engine() {
        let compiled = compile(&SearchRequest {
            rating_min: Some(f64::NAN),
            rating_max: Some(9.0),
            duration_max: Some(f64::NAN),
            ..request()
        });
        let query = compiled.query.unwrap();
        assert_eq!(
            serde_json::to_value(&query.bool.filter).unwrap(),
            json!([{"range": {"users_rating": {"lte": 9.0}}}])
        );

        let text = serde_json::to_string(&query).unwrap();
        let parsed: Query = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_only_nan_bounds_match_everything() {
        let compiled = compile(&SearchRequest {
            rating_min: Some(f64::NAN),
            ..request()
        });
        assert!(compiled.query.is_none());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let compiled = compile(&SearchRequest {
            page: Some(u64::MAX),
            ..request()
        });
        assert_eq!(compiled.from, u64::MAX);
    }
}
