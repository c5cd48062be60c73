//! Service configuration.

use {clap::Parser, url::Url};

/// Movie catalog service command line arguments.
#[derive(Debug, Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Aggregates movie-info and ratings into a user catalog")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, env = "CATALOG_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Base address of the movie-info service.
    #[arg(long, env = "MOVIE_INFO_URL", default_value = "http://movie-info")]
    pub movie_info_url: Url,

    /// Base address of the ratings service.
    #[arg(long, env = "RATINGS_URL", default_value = "http://ratings-data")]
    pub ratings_url: Url,

    /// Movie identifiers listed in every catalog, in order.
    #[arg(
        long,
        env = "CATALOG_MOVIE_IDS",
        value_delimiter = ',',
        default_value = "1234,5678"
    )]
    pub movie_ids: Vec<String>,

    /// Number of HTTP workers. Defaults to one per core.
    #[arg(long, env = "CATALOG_WORKERS")]
    pub workers: Option<usize>,

    /// Log filter directives.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub listen_addr: String,
    pub movie_info_url: Url,
    pub ratings_url: Url,
    pub movie_ids: Vec<String>,
    pub workers: Option<usize>,
    pub log_filter: String,
}

impl From<&Args> for CatalogConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            movie_info_url: args.movie_info_url.clone(),
            ratings_url: args.ratings_url.clone(),
            movie_ids: args
                .movie_ids
                .iter()
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
            workers: args.workers,
            log_filter: args.log_filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_names() {
        let args = Args::try_parse_from(["movie-catalog"]).unwrap();
        let config = CatalogConfig::from(&args);

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.movie_info_url.as_str(), "http://movie-info/");
        assert_eq!(config.ratings_url.as_str(), "http://ratings-data/");
        assert_eq!(config.movie_ids, ["1234", "5678"]);
        assert_eq!(config.workers, None);
    }

    #[test]
    fn movie_ids_are_split_and_trimmed() {
        let args = Args::try_parse_from([
            "movie-catalog",
            "--movie-ids",
            "42, 7,,99",
            "--ratings-url",
            "http://localhost:8083/",
        ])
        .unwrap();
        let config = CatalogConfig::from(&args);

        assert_eq!(config.movie_ids, ["42", "7", "99"]);
        assert_eq!(config.ratings_url.as_str(), "http://localhost:8083/");
    }

    #[test]
    fn invalid_collaborator_url_is_rejected() {
        assert!(Args::try_parse_from(["movie-catalog", "--movie-info-url", "not a url"]).is_err());
    }
}
