use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL that poster paths are appended to
    #[serde(default = "default_tmdb_image_base_url")]
    pub tmdb_image_base_url: String,

    /// Path to the movie catalog artifact (JSON)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the similarity matrix artifact (JSON or raw f32)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Number of similar movies to recommend
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Idle time after which a session is dropped
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: i64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_catalog_path() -> String {
    "data/movies.json".to_string()
}

fn default_similarity_path() -> String {
    "data/similarity.bin".to_string()
}

fn default_recommendation_count() -> usize {
    5
}

fn default_session_ttl_secs() -> i64 {
    3600
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let vars = vec![("TMDB_API_KEY".to_string(), "secret".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.tmdb_api_key, "secret");
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org");
        assert_eq!(config.tmdb_image_base_url, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.recommendation_count, 5);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let vars: Vec<(String, String)> = vec![("PORT".to_string(), "8080".to_string())];
        let result = envy::from_iter::<_, Config>(vars);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("TMDB_API_KEY".to_string(), "k".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("RECOMMENDATION_COUNT".to_string(), "3".to_string()),
            ("SIMILARITY_PATH".to_string(), "/srv/sim.json".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.recommendation_count, 3);
        assert_eq!(config.similarity_path, "/srv/sim.json");
    }
}
