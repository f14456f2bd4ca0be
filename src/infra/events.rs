//! Event publisher - fire-and-forget delivery of notification events.
//!
//! Events ride a Redis pub/sub channel. Delivery is best-effort by
//! contract: callers catch and log publish failures, they never let them
//! propagate into the triggering request's outcome.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use crate::config::Config;
use crate::domain::NotificationEvent;
use crate::errors::{AppError, AppResult};

/// Event publisher trait for dependency injection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to the given channel. No delivery guarantee.
    async fn publish(&self, channel: &str, event: &NotificationEvent) -> AppResult<()>;
}

/// Publisher backed by Redis pub/sub.
#[derive(Clone)]
pub struct RedisPublisher {
    connection: ConnectionManager,
}

impl RedisPublisher {
    /// Connect to Redis, returning an error if the server is unreachable.
    pub async fn connect(config: &Config) -> Result<Self, RedisError> {
        let client = Client::open(config.redis_url.as_str())?;
        let connection = ConnectionManager::new(client).await?;

        tracing::info!("Redis event publisher connected");

        Ok(Self { connection })
    }
}

#[async_trait]
impl EventPublisher for RedisPublisher {
    async fn publish(&self, channel: &str, event: &NotificationEvent) -> AppResult<()> {
        let payload = serde_json::to_string(event)
            .map_err(|e| AppError::internal(format!("Event serialization failed: {}", e)))?;

        let mut conn = self.connection.clone();
        let _subscribers: i64 = conn
            .publish(channel, payload)
            .await
            .map_err(|e| AppError::internal(format!("Event publish failed: {}", e)))?;

        tracing::debug!(
            channel = channel,
            event_type = %event.event_type,
            user_id = event.user_id,
            "notification event published"
        );

        Ok(())
    }
}

/// Fallback publisher used when Redis is not available: events are logged
/// instead of delivered, so the rest of the system behaves identically.
pub struct LogPublisher;

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, channel: &str, event: &NotificationEvent) -> AppResult<()> {
        tracing::info!(
            channel = channel,
            event_type = %event.event_type,
            user_id = event.user_id,
            user_email = %event.user_email,
            "notification event (not delivered, log-only publisher)"
        );
        Ok(())
    }
}
