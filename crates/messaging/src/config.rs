//! Broker configuration loaded from environment variables.

/// Broker topology with sensible defaults.
///
/// Reads from environment variables:
/// - `BROKER_EXCHANGE` — exchange name (default: `"user-service"`)
/// - `BROKER_QUEUE` — queue name (default: `"user-service.users"`)
/// - `BROKER_CONSUMING_TOPICS` — comma-separated routing keys to bind
///   (default: `"user.credentials.created"`)
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub exchange: String,
    pub queue: String,
    pub consuming_topics: Vec<String>,
}

impl BrokerConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            exchange: std::env::var("BROKER_EXCHANGE").unwrap_or(defaults.exchange),
            queue: std::env::var("BROKER_QUEUE").unwrap_or(defaults.queue),
            consuming_topics: std::env::var("BROKER_CONSUMING_TOPICS")
                .map(|raw| {
                    raw.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.consuming_topics),
        }
    }

    /// Returns true if the queue is bound to the given routing key.
    pub fn consumes(&self, routing_key: &str) -> bool {
        self.consuming_topics.iter().any(|t| t == routing_key)
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            exchange: "user-service".to_string(),
            queue: "user-service.users".to_string(),
            consuming_topics: vec![crate::handlers::USER_CREDENTIALS_CREATED.to_string()],
        }
    }
}
