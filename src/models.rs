use serde::{Deserialize, Serialize};

/// One entry of a user's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub desc: String,
    pub rating: i32,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            rating,
        }
    }
}

/// Payload returned by the movie-info service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Movie {
    pub name: String,
}

/// Payload returned by the ratings service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rating {
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_item_serializes_with_short_description_key() {
        let item = CatalogItem::new("Inception", "Description", 9);

        let json = serde_json::to_string(&item).unwrap();

        assert_eq!(json, r#"{"name":"Inception","desc":"Description","rating":9}"#);
    }

    #[test]
    fn movie_ignores_extra_fields() {
        let movie: Movie =
            serde_json::from_str(r#"{"movieId":"1234","name":"Inception","year":2010}"#).unwrap();

        assert_eq!(movie.name, "Inception");
    }

    #[test]
    fn null_fields_are_rejected() {
        assert!(serde_json::from_str::<Movie>(r#"{"name":null}"#).is_err());
        assert!(serde_json::from_str::<Rating>(r#"{"rating":null}"#).is_err());
        assert!(serde_json::from_str::<Rating>(r#"{}"#).is_err());
    }
}
