use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without one the service keeps its data in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,

    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    /// Defaults to the crate's `public/`, independent of the working directory.
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 10,
            host: "0.0.0.0".into(),
            port: 3000,
            cors_allowed_origins: Vec::new(),
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/public").into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .expect("PORT must be a number"),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr() {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" http://a.test, ,http://b.test ,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_default_is_in_memory_on_port_3000() {
        let config = Config::default();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, 3000);
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_default_static_dir_holds_the_stylesheet() {
        let config = Config::default();
        let stylesheet = std::path::Path::new(&config.static_dir).join("style.css");
        assert!(stylesheet.is_absolute());
        assert!(stylesheet.exists(), "missing {}", stylesheet.display());
    }
}
