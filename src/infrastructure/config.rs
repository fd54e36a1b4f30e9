use std::env;
use std::str::FromStr;

pub const DEFAULT_REVIEWS_API_URL: &str = "https://api.nytimes.com/svc/books/v3/reviews.json";

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Full DSN; overrides the individual `DB_*` parts when set
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_connection_limit: u32,
    pub api_key: Option<String>,
    pub reviews_api_url: String,
    pub static_dir: String,
    pub cors_allowed_origins: Vec<String>,
    pub seed_demo: bool,
}

impl Config {
    /// Read the process environment; the first positional argument, if it is
    /// a port number, takes precedence over `PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(env::args().skip(1), |key| env::var(key).ok())
    }

    pub fn from_lookup<I, F>(args: I, lookup: F) -> Self
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let port = args
            .into_iter()
            .next()
            .and_then(|arg| arg.parse::<u16>().ok())
            .filter(|p| *p != 0)
            .or_else(|| {
                lookup("PORT")
                    .and_then(|p| p.parse::<u16>().ok())
                    .filter(|p| *p != 0)
            })
            .unwrap_or(3000);

        Self {
            port,
            database_url: non_empty(lookup("DATABASE_URL")),
            db_host: non_empty(lookup("DB_HOST")).unwrap_or_else(|| "localhost".to_string()),
            db_port: parse_or(&lookup, "DB_PORT", 3306),
            db_name: non_empty(lookup("DB_NAME")).unwrap_or_else(|| "goodreads".to_string()),
            db_user: non_empty(lookup("DB_USER")),
            db_password: lookup("DB_PASSWORD"),
            db_connection_limit: parse_or(&lookup, "DB_CONNECTION_LIMIT", 4).max(1),
            api_key: non_empty(lookup("API_KEY")),
            reviews_api_url: non_empty(lookup("REVIEWS_API_URL"))
                .unwrap_or_else(|| DEFAULT_REVIEWS_API_URL.to_string()),
            static_dir: non_empty(lookup("STATIC_DIR")).unwrap_or_else(|| "static".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            seed_demo: lookup("SEED_DEMO").is_some(),
        }
    }

    /// Connection string for the datastore.
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let credentials = match (&self.db_user, &self.db_password) {
            (Some(user), Some(password)) => format!(
                "{}:{}@",
                urlencoding::encode(user),
                urlencoding::encode(password)
            ),
            (Some(user), None) => format!("{}@", urlencoding::encode(user)),
            (None, Some(_)) => {
                tracing::warn!("DB_PASSWORD is set without DB_USER; connecting without credentials");
                String::new()
            }
            (None, None) => String::new(),
        };

        format!(
            "mysql://{}{}:{}/{}",
            credentials, self.db_host, self.db_port, self.db_name
        )
    }

    /// Datastore location without credentials, for logs
    pub fn database_endpoint(&self) -> String {
        match &self.database_url {
            Some(url) => url.rsplit('@').next().unwrap_or(url).to_string(),
            None => format!("{}:{}/{}", self.db_host, self.db_port, self.db_name),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}
