use async_trait::async_trait;

use crate::entities::{Event, NewEvent, NewToothbrushEvent, ToothbrushEvent};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert_event(&self, event: &NewEvent) -> anyhow::Result<()>;
    /// Returns the number of rows written.
    async fn insert_events(&self, events: &[NewEvent]) -> anyhow::Result<u64>;
    /// All events, newest first.
    async fn list_events(&self) -> anyhow::Result<Vec<Event>>;
    /// Returns whether a row was removed.
    async fn delete_event(&self, id: i64) -> anyhow::Result<bool>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ToothbrushRepository: Send + Sync {
    async fn insert_toothbrush_event(&self, event: &NewToothbrushEvent) -> anyhow::Result<()>;
    async fn insert_toothbrush_events(&self, events: &[NewToothbrushEvent]) -> anyhow::Result<u64>;
    /// All toothbrush events, newest first.
    async fn list_toothbrush_events(&self) -> anyhow::Result<Vec<ToothbrushEvent>>;
}
