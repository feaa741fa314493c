//! PostgreSQL store gateway.
//!
//! Every logical operation opens its own connection through [`PgGateway::acquire`]
//! and gives it back with [`StoreConnection::release`]. There is no pool and
//! no transaction spans more than one operation.

use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use thiserror::Error;
use tracing::{debug, warn};

use backend_domain::DbConfig;

const CREATE_EVENTS: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id BIGSERIAL PRIMARY KEY,
    event_type TEXT NOT NULL,
    location TEXT NOT NULL,
    who TEXT,
    timestamp TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_TOOTHBRUSH_EVENTS: &str = r#"
CREATE TABLE IF NOT EXISTS toothbrush_events (
    id BIGSERIAL PRIMARY KEY,
    timestamp TIMESTAMPTZ NOT NULL DEFAULT now(),
    used_irrigator BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

// Postgres SQLSTATEs
const CANNOT_CONNECT_NOW: &str = "57P03";
const TOO_MANY_CONNECTIONS: &str = "53300";
const UNIQUE_VIOLATION: &str = "23505";
const DUPLICATE_TABLE: &str = "42P07";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database configuration: {0}")]
    Config(#[source] sqlx::Error),
    #[error("could not connect to database after {attempts} attempt(s): {source}")]
    Connect {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },
    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &DbConfig) -> Self {
        Self {
            attempts: config.connect_retries.saturating_add(1),
            delay: Duration::from_millis(config.connect_retry_delay_ms),
        }
    }
}

pub struct PgGateway {
    options: PgConnectOptions,
    retry: RetryPolicy,
}

impl PgGateway {
    pub fn new(config: &DbConfig) -> Result<Self, StoreError> {
        Ok(Self {
            options: connect_options(config)?,
            retry: RetryPolicy::from_config(config),
        })
    }

    /// Connects, retrying transient failures with a fixed delay, then makes
    /// sure both tables exist.
    pub async fn acquire(&self) -> Result<StoreConnection, StoreError> {
        let mut attempt = 0;
        let mut conn = loop {
            attempt += 1;
            match self.options.connect().await {
                Ok(conn) => break conn,
                Err(err) if attempt < self.retry.attempts && is_transient(&err) => {
                    warn!(
                        attempt,
                        max_attempts = self.retry.attempts,
                        "database connect failed, retrying in {:?}: {}",
                        self.retry.delay,
                        err
                    );
                    tokio::time::sleep(self.retry.delay).await;
                }
                Err(err) => {
                    return Err(StoreError::Connect {
                        attempts: attempt,
                        source: err,
                    })
                }
            }
        };
        ensure_schema(&mut conn).await?;
        Ok(StoreConnection { conn })
    }

    /// `host:port/database`, without credentials.
    pub fn target(&self) -> String {
        format!(
            "{}:{}/{}",
            self.options.get_host(),
            self.options.get_port(),
            self.options.get_database().unwrap_or("-")
        )
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        conn.release().await;
        Ok(())
    }
}

/// A connection scoped to one logical operation. Dropping the guard closes
/// the socket, so an early return through `?` still releases it.
pub struct StoreConnection {
    conn: PgConnection,
}

impl StoreConnection {
    pub async fn release(self) {
        if let Err(err) = self.conn.close().await {
            debug!("closing database connection failed: {}", err);
        }
    }
}

impl Deref for StoreConnection {
    type Target = PgConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for StoreConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

fn connect_options(config: &DbConfig) -> Result<PgConnectOptions, StoreError> {
    if let Some(url) = &config.database_url {
        return PgConnectOptions::from_str(url).map_err(StoreError::Config);
    }
    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.name);
    if let Some(password) = &config.password {
        options = options.password(password);
    }
    Ok(options)
}

async fn ensure_schema(conn: &mut PgConnection) -> Result<(), StoreError> {
    for statement in [CREATE_EVENTS, CREATE_TOOTHBRUSH_EVENTS] {
        if let Err(err) = sqlx::query(statement).execute(&mut *conn).await {
            // two first connections racing on CREATE TABLE IF NOT EXISTS
            if !has_sqlstate(&err, &[UNIQUE_VIOLATION, DUPLICATE_TABLE]) {
                return Err(StoreError::Query(err));
            }
        }
    }
    Ok(())
}

pub(crate) fn is_transient(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(_) => has_sqlstate(err, &[CANNOT_CONNECT_NOW, TOO_MANY_CONNECTIONS]),
        _ => false,
    }
}

fn has_sqlstate(err: &sqlx::Error, codes: &[&str]) -> bool {
    match err {
        sqlx::Error::Database(db) => db
            .code()
            .map(|code| codes.contains(&code.as_ref()))
            .unwrap_or(false),
        _ => false,
    }
}
