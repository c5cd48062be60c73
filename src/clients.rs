//! Outbound calls to the movie-info and ratings collaborators.
//!
//! The aggregator only sees the [`MovieInfoSource`] and [`RatingsSource`]
//! traits; the HTTP clients here are the production implementations. Both
//! perform exactly one request per call: no retry, no timeout override.

use {
    crate::{
        error::FetchError,
        models::{Movie, Rating},
    },
    reqwest::Client,
    serde::de::DeserializeOwned,
    std::future::Future,
    url::Url,
};

pub trait MovieInfoSource {
    fn movie(&self, movie_id: &str) -> impl Future<Output = Result<Movie, FetchError>>;
}

pub trait RatingsSource {
    fn rating(&self, movie_id: &str) -> impl Future<Output = Result<Rating, FetchError>>;
}

/// `GET <base>/movies/<movieId>`
#[derive(Debug, Clone)]
pub struct MovieInfoClient {
    http: Client,
    base: Url,
}

impl MovieInfoClient {
    pub fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }
}

impl MovieInfoSource for MovieInfoClient {
    async fn movie(&self, movie_id: &str) -> Result<Movie, FetchError> {
        let url = resource_url(&self.base, "movies", movie_id)?;

        get_json(&self.http, url).await
    }
}

/// `GET <base>/ratingsdata/<movieId>`
#[derive(Debug, Clone)]
pub struct RatingsClient {
    http: Client,
    base: Url,
}

impl RatingsClient {
    pub fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }
}

impl RatingsSource for RatingsClient {
    async fn rating(&self, movie_id: &str) -> Result<Rating, FetchError> {
        let url = resource_url(&self.base, "ratingsdata", movie_id)?;

        get_json(&self.http, url).await
    }
}

/// Appends `resource/id` to whatever path `base` already has. The id is
/// percent-encoded as a single segment; `""`, `.` and `..` are refused since
/// they would address the collection or its parent instead.
fn resource_url(base: &Url, resource: &str, id: &str) -> Result<Url, FetchError> {
    if matches!(id, "" | "." | "..") {
        return Err(FetchError::Identifier { id: id.to_string() });
    }

    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| FetchError::Address { base: base.clone() })?
        .pop_if_empty()
        .push(resource)
        .push(id);

    Ok(url)
}

async fn get_json<T: DeserializeOwned>(http: &Client, url: Url) -> Result<T, FetchError> {
    tracing::debug!(%url, "calling collaborator");

    let response = http.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { url, status });
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn resource_url_appends_to_bare_host() {
        let built = resource_url(&url("http://movie-info"), "movies", "1234").unwrap();

        assert_eq!(built.as_str(), "http://movie-info/movies/1234");
    }

    #[test]
    fn resource_url_keeps_path_prefix() {
        let with_slash = resource_url(&url("http://gateway:8081/api/"), "ratingsdata", "5678").unwrap();
        let without = resource_url(&url("http://gateway:8081/api"), "ratingsdata", "5678").unwrap();

        assert_eq!(with_slash.as_str(), "http://gateway:8081/api/ratingsdata/5678");
        assert_eq!(with_slash, without);
    }

    #[test]
    fn resource_url_encodes_the_identifier() {
        let built = resource_url(&url("http://movie-info"), "movies", "a/b c").unwrap();

        assert_eq!(built.as_str(), "http://movie-info/movies/a%2Fb%20c");
    }

    #[test]
    fn resource_url_refuses_dot_and_empty_identifiers() {
        for id in ["", ".", ".."] {
            let err = resource_url(&url("http://movie-info"), "movies", id).unwrap_err();

            assert!(matches!(err, FetchError::Identifier { id: ref rejected } if rejected == id));
        }

        let dotted = resource_url(&url("http://movie-info"), "movies", "...").unwrap();
        assert_eq!(dotted.as_str(), "http://movie-info/movies/...");
    }

    #[test]
    fn resource_url_rejects_opaque_base() {
        let err = resource_url(&url("mailto:movies@example.com"), "movies", "1234").unwrap_err();

        assert!(matches!(err, FetchError::Address { .. }));
    }
}
