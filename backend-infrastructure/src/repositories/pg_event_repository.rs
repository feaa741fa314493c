use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Connection, FromRow, Postgres, QueryBuilder};

use backend_domain::{
    classify_event_type, classify_location, Event, EventRepository, NewEvent,
};

use crate::repositories::pg_gateway::PgGateway;

/// Rows per multi-row INSERT; keeps bind parameters well under the
/// protocol's 65535 limit.
pub(crate) const INSERT_CHUNK_ROWS: usize = 1000;

#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    event_type: String,
    location: String,
    who: Option<String>,
    timestamp: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        // rows written by older clients may hold free text
        Event {
            id: row.id,
            event_type: row
                .event_type
                .parse()
                .unwrap_or_else(|_| classify_event_type(&row.event_type)),
            location: row
                .location
                .parse()
                .unwrap_or_else(|_| classify_location(&row.location)),
            who: row.who,
            timestamp: row.timestamp,
        }
    }
}

#[derive(Clone)]
pub struct PgEventRepository {
    gateway: Arc<PgGateway>,
}

impl PgEventRepository {
    pub fn new(gateway: Arc<PgGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn insert_event(&self, event: &NewEvent) -> anyhow::Result<()> {
        let mut conn = self.gateway.acquire().await?;
        sqlx::query(
            "INSERT INTO events (event_type, location, who, timestamp) VALUES ($1, $2, $3, $4)",
        )
        .bind(event.event_type.as_str())
        .bind(event.location.as_str())
        .bind(event.who.as_deref())
        .bind(event.timestamp)
        .execute(&mut *conn)
        .await?;
        conn.release().await;
        Ok(())
    }

    async fn insert_events(&self, events: &[NewEvent]) -> anyhow::Result<u64> {
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

    async fn list_events(&self) -> anyhow::Result<Vec<Event>> {
        let mut conn = self.gateway.acquire().await?;
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, event_type, location, who, timestamp FROM events ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&mut *conn)
        .await?;
        conn.release().await;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn delete_event(&self, id: i64) -> anyhow::Result<bool> {
        let mut conn = self.gateway.acquire().await?;
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        conn.release().await;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.gateway.ping().await?;
        Ok(())
    }
}

/// One multi-row INSERT per `INSERT_CHUNK_ROWS` events.
fn insert_batches(events: &[NewEvent]) -> Vec<QueryBuilder<'_, Postgres>> {
    events
        .chunks(INSERT_CHUNK_ROWS)
        .map(|chunk| {
            let mut builder =
                QueryBuilder::new("INSERT INTO events (event_type, location, who, timestamp) ");
            builder.push_values(chunk, |mut row, event| {
                row.push_bind(event.event_type.as_str())
                    .push_bind(event.location.as_str())
                    .push_bind(event.who.as_deref())
                    .push_bind(event.timestamp);
            });
            builder
        })
        .collect()
}
