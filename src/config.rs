use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "8000"),
            redis_host: try_load("REDIS_HOST", "127.0.0.1"),
            redis_port: try_load("REDIS_PORT", "6379"),
            redis_password: require("REDIS_PASSWORD"),
        }
    }

    pub fn redis_url(&self) -> String {
        format!(
            "rediss://:{}@{}:{}/0",
            self.redis_password, self.redis_host, self.redis_port
        )
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn require(key: &str) -> String {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not set");
        })
        .expect("Environment misconfigured!")
}
