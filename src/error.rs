use {
    actix_web::{http::StatusCode, HttpResponse, ResponseError},
    reqwest::StatusCode as UpstreamStatus,
    serde::Serialize,
    thiserror::Error,
    url::Url,
};

/// A single call to a collaborator failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with {status}")]
    Status { url: Url, status: UpstreamStatus },

    #[error("base address {base} cannot take path segments")]
    Address { base: Url },

    #[error("{id:?} cannot be addressed as a single path segment")]
    Identifier { id: String },
}

/// Building a catalog failed; no partial result is ever returned.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("movie-info lookup for {movie_id} failed")]
    MovieInfo {
        movie_id: String,
        #[source]
        source: FetchError,
    },

    #[error("ratings lookup for {movie_id} failed")]
    Ratings {
        movie_id: String,
        #[source]
        source: FetchError,
    },
}

impl CatalogError {
    pub fn movie_id(&self) -> &str {
        match self {
            CatalogError::MovieInfo { movie_id, .. } | CatalogError::Ratings { movie_id, .. } => {
                movie_id
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    error: &'static str,
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Internal Server Error"),
        })
    }
}
