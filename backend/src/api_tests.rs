#[cfg(test)]
mod tests {
    use crate::api::{Movie, MovieId};
    use serde_json::json;

    #[test]
    fn test_movie_id_display() {
        let id = MovieId::new("abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_movie_id_generate_is_unique() {
        let id1 = MovieId::generate();
        let id2 = MovieId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 32);
    }

    #[test]
    fn test_movie_id_serializes_as_plain_string() {
        let id = MovieId::from("m-1");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("m-1"));
    }

    #[test]
    fn test_movie_minimal_body() {
        let movie: Movie = serde_json::from_value(json!({ "title": "Inception" })).unwrap();
        assert_eq!(movie.title, "Inception");
        assert!(movie.id.is_none());
        assert!(movie.featured.is_none());
        assert!(movie.attributes.is_empty());

        // Nothing is invented on the way back out
        assert_eq!(serde_json::to_value(&movie).unwrap(), json!({ "title": "Inception" }));
    }

    #[test]
    fn test_movie_keeps_unknown_attributes() {
        let body = json!({
            "id": "42",
            "title": "The Matrix",
            "featured": true,
            "year": 1999,
            "genres": ["Action", "Sci-Fi"],
            "rating": { "imdb": 8.7 }
        });

        let movie: Movie = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(movie.id, Some(MovieId::new("42")));
        assert_eq!(movie.featured, Some(true));
        assert_eq!(movie.attributes.get("year"), Some(&json!(1999)));
        assert_eq!(serde_json::to_value(&movie).unwrap(), body);
    }

    #[test]
    fn test_movie_rejects_non_boolean_featured() {
        let result = serde_json::from_value::<Movie>(json!({ "title": "x", "featured": "yes" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_featured_defaults_to_false() {
        assert!(!Movie::new("a").is_featured());
        assert!(Movie::new("a").with_featured(true).is_featured());
        assert!(!Movie::new("a").with_featured(false).is_featured());
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let movie = Movie::new("The Matrix Reloaded");
        assert!(movie.title_contains("matrix"));
        assert!(movie.title_contains("MATRIX"));
        assert!(movie.title_contains(""));
        assert!(!movie.title_contains("Inception"));
    }

    #[test]
    fn test_with_attribute() {
        let movie = Movie::new("Alien").with_attribute("year", 1979);
        assert_eq!(movie.attributes.get("year"), Some(&json!(1979)));
    }
}
