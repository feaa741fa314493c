use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Connection, FromRow, Postgres, QueryBuilder};

use backend_domain::{NewToothbrushEvent, ToothbrushEvent, ToothbrushRepository};

use crate::repositories::pg_event_repository::INSERT_CHUNK_ROWS;
use crate::repositories::pg_gateway::PgGateway;

#[derive(Debug, FromRow)]
struct ToothbrushRow {
    id: i64,
    timestamp: DateTime<Utc>,
    used_irrigator: bool,
}

impl From<ToothbrushRow> for ToothbrushEvent {
    fn from(row: ToothbrushRow) -> Self {
        ToothbrushEvent {
            id: row.id,
            timestamp: row.timestamp,
            used_irrigator: row.used_irrigator,
        }
    }
}

#[derive(Clone)]
pub struct PgToothbrushRepository {
    gateway: Arc<PgGateway>,
}

impl PgToothbrushRepository {
    pub fn new(gateway: Arc<PgGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ToothbrushRepository for PgToothbrushRepository {
    async fn insert_toothbrush_event(&self, event: &NewToothbrushEvent) -> anyhow::Result<()> {
        let mut conn = self.gateway.acquire().await?;
        sqlx::query("INSERT INTO toothbrush_events (timestamp, used_irrigator) VALUES ($1, $2)")
            .bind(event.timestamp)
            .bind(event.used_irrigator)
            .execute(&mut *conn)
            .await?;
        conn.release().await;
        Ok(())
    }

    async fn insert_toothbrush_events(&self, events: &[NewToothbrushEvent]) -> anyhow::Result<u64> {
        if events.is_empty() {
            return Ok(0);
        }
        let mut conn = self.gateway.acquire().await?;
        // all chunks commit together or not at all
        let mut tx = conn.begin().await?;
        let mut written = 0;
        for mut batch in insert_batches(events) {
            written += batch.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;
        conn.release().await;
        Ok(written)
    }

    async fn list_toothbrush_events(&self) -> anyhow::Result<Vec<ToothbrushEvent>> {
        let mut conn = self.gateway.acquire().await?;
        let rows = sqlx::query_as::<_, ToothbrushRow>(
            "SELECT id, timestamp, used_irrigator FROM toothbrush_events ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&mut *conn)
        .await?;
        conn.release().await;
        Ok(rows.into_iter().map(ToothbrushEvent::from).collect())
    }
}

fn insert_batches(events: &[NewToothbrushEvent]) -> Vec<QueryBuilder<'_, Postgres>> {
    events
        .chunks(INSERT_CHUNK_ROWS)
        .map(|chunk| {
            let mut builder =
                QueryBuilder::new("INSERT INTO toothbrush_events (timestamp, used_irrigator) ");
            builder.push_values(chunk, |mut row, event| {
                row.push_bind(event.timestamp).push_bind(event.used_irrigator);
            });
            builder
        })
        .collect()
}
