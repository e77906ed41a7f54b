use std::sync::Arc;

use super::{config::Config, database::init_redis, store::MessageStore};

pub struct State {
    pub config: Config,
    pub messages: MessageStore,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let connection = init_redis(&config.redis_url()).await;
        let messages = MessageStore::new(connection);

        Arc::new(Self { config, messages })
    }
}
