use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            // Bookings only live for the process lifetime, so the ledger
            // defaults to an in-memory database.
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| ":memory:".to_string()),
        }
    }
}
