// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::aggregation::Facets;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Search request as received from the HTTP layer.
///
/// Every field is optional. `None` means "not requested"; `Some(0.0)` is a
/// real bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub search_text: Option<String>,
    pub country: Option<String>,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
    pub language: Option<String>,
    pub year: Option<i64>,
    pub genre: Vec<String>,
    pub duration_min: Option<f64>,
    pub duration_max: Option<f64>,
    /// Zero-based page index
    pub page: Option<u64>,
    /// Page size
    pub limit: Option<u64>,
}

impl SearchRequest {
    /// Build a request from a URL query string such as
    /// `searchText=alien&genre=Horror&genre=Sci-Fi&ratingMin=6`.
    pub fn from_query_string(query: &str) -> Self {
        Self::from_query_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Build a request from decoded key/value pairs.
    ///
    /// Unknown keys are ignored. Blank strings and numbers that fail to parse
    /// are treated as absent. `genre` may be repeated, written as `genre[]`,
    /// or hold a comma-separated list.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = SearchRequest::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "searchText" => request.search_text = parse_text(value),
                "country" => request.country = parse_text(value),
                "language" => request.language = parse_text(value),
                "ratingMin" => request.rating_min = parse_number(value),
                "ratingMax" => request.rating_max = parse_number(value),
                "durationMin" => request.duration_min = parse_number(value),
                "durationMax" => request.duration_max = parse_number(value),
                "year" => request.year = parse_integer(value),
                "page" => request.page = parse_integer(value).and_then(|v| u64::try_from(v).ok()),
                "limit" => {
                    request.limit = parse_integer(value).and_then(|v| u64::try_from(v).ok())
                }
                "genre" | "genre[]" => request.genre.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|g| !g.is_empty())
                        .map(str::to_string),
                ),
                _ => {}
            }
        }

        request
    }

    /// True when no filter field (everything except `page` and `limit`) is
    /// present. Non-finite bounds count as absent.
    pub fn is_unfiltered(&self) -> bool {
        is_blank(&self.search_text)
            && is_blank(&self.country)
            && is_blank(&self.language)
            && !is_bound(self.rating_min)
            && !is_bound(self.rating_max)
            && self.year.is_none()
            && self.genre.is_empty()
            && !is_bound(self.duration_min)
            && !is_bound(self.duration_max)
    }
}

fn is_bound(value: Option<f64>) -> bool {
    value.is_some_and(f64::is_finite)
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn parse_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    value.parse::<i64>().ok().or_else(|| {
        // "2014.0" is accepted, "2014.5" is not
        parse_number(value)
            .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64)
    })
}

/// A movie as returned to the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub rating: f64,
    pub votes: u64,
    pub image: String,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
    pub actors: Vec<String>,
    pub genre: Vec<String>,
    pub directors: Vec<String>,
    pub description: String,
    /// Runtime in hours
    pub duration: f64,
    pub imdb_url: String,
}

/// Document body stored in the movie index (`_source`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieSource {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub users_rating: Option<f64>,
    pub votes: Option<u64>,
    pub img_url: Option<String>,
    pub countries: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub actors: Option<Vec<String>>,
    pub genre: Option<Vec<String>>,
    pub directors: Option<Vec<String>>,
    pub description: Option<String>,
    pub runtime: Option<f64>,
    pub imdb_url: Option<String>,
}

impl Movie {
    /// Rename engine fields into the public record; missing fields default.
    pub fn from_source(id: String, source: MovieSource) -> Self {
        Movie {
            id,
            title: source.title.unwrap_or_default(),
            year: source.year.unwrap_or_default(),
            rating: source.users_rating.unwrap_or_default(),
            votes: source.votes.unwrap_or_default(),
            image: source.img_url.unwrap_or_default(),
            countries: source.countries.unwrap_or_default(),
            languages: source.languages.unwrap_or_default(),
            actors: source.actors.unwrap_or_default(),
            genre: source.genre.unwrap_or_default(),
            directors: source.directors.unwrap_or_default(),
            description: source.description.unwrap_or_default(),
            duration: source.runtime.unwrap_or_default(),
            imdb_url: source.imdb_url.unwrap_or_default(),
        }
    }
}

/// Payload of a successful search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    /// Engine-reported search time in milliseconds
    pub search_duration: u64,
    /// Total number of matching movies
    pub total: u64,
    pub movies: Vec<Movie>,
    pub facets: Facets,
}
