use std::env;

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // mode=rwc so the dev database file is created on first run.
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://dev_database.db?mode=rwc".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "80".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
