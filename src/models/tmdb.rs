use serde::Deserialize;

use super::movie::MovieDetail;

/// Number of cast members kept per movie
pub const TOP_CAST: usize = 3;

/// Crew job that marks a director credit
pub const DIRECTOR_JOB: &str = "Director";

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response of GET /3/movie/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
}

/// Response of GET /3/movie/{id}/credits
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
}

impl TmdbCredits {
    /// First `TOP_CAST` cast names, billing order
    pub fn lead_actors(&self) -> Vec<String> {
        self.cast
            .iter()
            .take(TOP_CAST)
            .map(|member| member.name.clone())
            .collect()
    }

    /// Names of every crew member whose job is exactly "Director"
    pub fn directors(&self) -> Vec<String> {
        self.crew
            .iter()
            .filter(|member| member.job.as_deref() == Some(DIRECTOR_JOB))
            .map(|member| member.name.clone())
            .collect()
    }
}

/// Joins the image CDN base with a poster path
pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!(
        "{}/{}",
        image_base_url.trim_end_matches('/'),
        poster_path.trim_start_matches('/')
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl MovieDetail {
    /// Reshapes the two TMDB responses for one movie
    pub fn from_tmdb(movie: TmdbMovie, credits: &TmdbCredits, image_base_url: &str) -> Self {
        let poster = non_empty(movie.poster_path).map(|path| poster_url(image_base_url, &path));

        MovieDetail {
            poster,
            title: movie.title,
            overview: non_empty(movie.overview),
            homepage: non_empty(movie.homepage),
            actors: credits.lead_actors(),
            directors: credits.directors(),
            runtime: movie.runtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn credits_json() -> &'static str {
        r#"{
            "id": 603,
            "cast": [
                {"name": "Keanu Reeves", "character": "Neo"},
                {"name": "Laurence Fishburne", "character": "Morpheus"},
                {"name": "Carrie-Anne Moss", "character": "Trinity"},
                {"name": "Hugo Weaving", "character": "Agent Smith"},
                {"name": "Joe Pantoliano", "character": "Cypher"}
            ],
            "crew": [
                {"name": "Lana Wachowski", "job": "Director"},
                {"name": "Joel Silver", "job": "Producer"},
                {"name": "Lilly Wachowski", "job": "Director"},
                {"name": "Bill Pope", "job": "Director of Photography"}
            ]
        }"#
    }

    #[test]
    fn test_five_cast_entries_yield_three_actors_in_order() {
        let credits: TmdbCredits = serde_json::from_str(credits_json()).unwrap();
        assert_eq!(
            credits.lead_actors(),
            vec!["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"]
        );
    }

    #[test]
    fn test_short_cast_keeps_everyone() {
        let credits: TmdbCredits =
            serde_json::from_str(r#"{"cast": [{"name": "Solo"}], "crew": []}"#).unwrap();
        assert_eq!(credits.lead_actors(), vec!["Solo"]);
    }

    #[test]
    fn test_two_directors_in_order() {
        let credits: TmdbCredits = serde_json::from_str(credits_json()).unwrap();
        // "Director of Photography" must not match
        assert_eq!(
            credits.directors(),
            vec!["Lana Wachowski", "Lilly Wachowski"]
        );
    }

    #[test]
    fn test_no_director_is_empty() {
        let credits: TmdbCredits = serde_json::from_str(
            r#"{"cast": [], "crew": [{"name": "Someone", "job": "Editor"}, {"name": "Nobody"}]}"#,
        )
        .unwrap();
        assert!(credits.directors().is_empty());
    }

    #[test]
    fn test_poster_url_formatting() {
        assert_eq!(
            poster_url(IMAGE_BASE, "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"),
            "https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
        );
        assert_eq!(
            poster_url("https://cdn.local/", "poster.jpg"),
            "https://cdn.local/poster.jpg"
        );
    }

    #[test]
    fn test_from_tmdb() {
        let movie: TmdbMovie = serde_json::from_str(
            r#"{
                "id": 603,
                "title": "The Matrix",
                "poster_path": "/matrix.jpg",
                "overview": "Set in the 22nd century...",
                "homepage": "",
                "runtime": 136
            }"#,
        )
        .unwrap();
        let credits: TmdbCredits = serde_json::from_str(credits_json()).unwrap();

        let detail = MovieDetail::from_tmdb(movie, &credits, IMAGE_BASE);

        assert_eq!(detail.title, "The Matrix");
        assert_eq!(
            detail.poster.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/matrix.jpg")
        );
        assert_eq!(detail.overview.as_deref(), Some("Set in the 22nd century..."));
        assert_eq!(detail.homepage, None);
        assert_eq!(detail.runtime, Some(136));
        assert_eq!(detail.actors.len(), 3);
        assert_eq!(detail.directors.len(), 2);
    }

    #[test]
    fn test_from_tmdb_null_poster() {
        let movie: TmdbMovie =
            serde_json::from_str(r#"{"title": "Obscure", "poster_path": null, "runtime": null}"#)
                .unwrap();
        let credits = TmdbCredits {
            cast: vec![],
            crew: vec![],
        };

        let detail = MovieDetail::from_tmdb(movie, &credits, IMAGE_BASE);
        assert_eq!(detail.poster, None);
        assert_eq!(detail.runtime, None);
    }
}
