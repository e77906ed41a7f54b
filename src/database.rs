//! # Redis
//!
//! RAM database.
//!
//! Core purpose is to store message bodies and hand out message ids via
//! atomic increments.
//!
//! ## Requirements
//!
//! - One shared connection handle, cloned per operation
//! - Encrypted transport, the cluster only accepts TLS clients
//! - Password auth, supplied through the environment
//!
//! ## Implementation
//!
//! - `msgctr`: plain integer key, `INCR` on every submission
//! - `message{n}`: one string key per message body
//! - `KEYS message*` enumerates the board; no index structure beyond the
//!   key prefix
use std::time::Duration;

use redis::{
    Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_secs(1));

    let client = Client::open(redis_url).unwrap();
    let connection_manager = client
        .get_connection_manager_with_config(config)
        .await
        .unwrap();

    connection_manager
}
