use std::env;

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return CorsOrigins::Any;
        }

        CorsOrigins::List(
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,

    // API key gate
    pub api_key: String,
    pub skip_auth: bool,

    pub cors_origins: CorsOrigins,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        let skip_auth = env::var("SKIP_API_KEY").is_ok_and(|v| v == "true")
            || env::var("APP_ENV").is_ok_and(|v| v == "development");

        let api_key = match env::var("API_KEY").or_else(|_| env::var("POWERAPPS_API_KEY")) {
            Ok(key) => key,
            // Bypass mode never compares keys, so an absent key is tolerated there.
            Err(_) if skip_auth => String::new(),
            Err(e) => return Err(e),
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            api_key,
            skip_auth,
            cors_origins: CorsOrigins::parse(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()),
        })
    }
}
