//! Message storage on top of Redis.
//!
//! Ids come from `INCR` on a single counter key, so they are strictly
//! increasing and never reused. Listing is `KEYS` on the message prefix
//! followed by one `GET` per key; the two steps are not atomic, so a
//! message appended mid-scan may be missing from that listing.
use std::collections::HashMap;

use redis::{AsyncCommands, aio::ConnectionManager};

use crate::error::AppError;

pub const COUNTER_KEY: &str = "msgctr";
pub const MESSAGE_PREFIX: &str = "message";

#[derive(Clone)]
pub struct MessageStore {
    connection: ConnectionManager,
}

impl MessageStore {
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }

    /// Store `text` under the next counter value and return its id.
    pub async fn append(&self, text: &str) -> Result<u64, AppError> {
        let mut connection = self.connection.clone();

        let id: u64 = connection.incr(COUNTER_KEY, 1).await?;
        let key = message_key(id);

        let _: () = connection.set(&key, text).await?;

        Ok(id)
    }

    /// Fetch every stored message as a key to text map.
    pub async fn list_all(&self) -> Result<HashMap<String, String>, AppError> {
        let mut connection = self.connection.clone();

        let keys: Vec<String> = connection.keys(format!("{MESSAGE_PREFIX}*")).await?;

        let mut messages = HashMap::with_capacity(keys.len());
        for key in keys {
            // A key seen by the scan can be gone by the time we fetch it.
            let value: Option<String> = connection.get(&key).await?;

            if let Some(text) = value {
                messages.insert(key, text);
            }
        }

        Ok(messages)
    }
}

pub fn message_key(id: u64) -> String {
    format!("{MESSAGE_PREFIX}{id}")
}

#[cfg(test)]
mod tests {
    use super::message_key;

    #[test]
    fn test_key_derivation() {
        assert_eq!(message_key(1), "message1");
        assert_eq!(message_key(10), "message10");
        assert_eq!(message_key(412), "message412");
    }
}
