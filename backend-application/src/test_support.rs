use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;

use backend_domain::{
    Event, EventRepository, NewEvent, NewToothbrushEvent, RuntimeConfig, ToothbrushEvent,
    ToothbrushRepository,
};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct FakeStore {
    events: Mutex<Vec<Event>>,
    toothbrush: Mutex<Vec<ToothbrushEvent>>,
    next_id: Mutex<i64>,
    offline: AtomicBool,
}

impl FakeStore {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn toothbrush(&self) -> Vec<ToothbrushEvent> {
        self.toothbrush.lock().unwrap().clone()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(anyhow!("connection refused"));
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }
}

#[async_trait]
impl EventRepository for FakeStore {
    async fn insert_event(&self, event: &NewEvent) -> anyhow::Result<()> {
        self.insert_events(std::slice::from_ref(event)).await.map(|_| ())
    }

    async fn insert_events(&self, events: &[NewEvent]) -> anyhow::Result<u64> {
        self.check()?;
        for event in events {
            let stored = Event {
                id: self.next_id(),
                event_type: event.event_type,
                location: event.location,
                who: event.who.clone(),
                timestamp: event.timestamp,
            };
            self.events.lock().unwrap().push(stored);
        }
        Ok(events.len() as u64)
    }

    async fn list_events(&self) -> anyhow::Result<Vec<Event>> {
        self.check()?;
        let mut events = self.events();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(events)
    }

    async fn delete_event(&self, id: i64) -> anyhow::Result<bool> {
        self.check()?;
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|event| event.id != id);
        Ok(events.len() != before)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.check()
    }
}

#[async_trait]
impl ToothbrushRepository for FakeStore {
    async fn insert_toothbrush_event(&self, event: &NewToothbrushEvent) -> anyhow::Result<()> {
        self.insert_toothbrush_events(std::slice::from_ref(event))
            .await
            .map(|_| ())
    }

    async fn insert_toothbrush_events(&self, events: &[NewToothbrushEvent]) -> anyhow::Result<u64> {
        self.check()?;
        for event in events {
            let stored = ToothbrushEvent {
                id: self.next_id(),
                timestamp: event.timestamp,
                used_irrigator: event.used_irrigator,
            };
            self.toothbrush.lock().unwrap().push(stored);
        }
        Ok(events.len() as u64)
    }

    async fn list_toothbrush_events(&self) -> anyhow::Result<Vec<ToothbrushEvent>> {
        self.check()?;
        let mut events = self.toothbrush();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(events)
    }
}

pub fn state_with(store: Arc<FakeStore>) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 5,
        },
        event_repo: store.clone(),
        toothbrush_repo: store,
        metrics: Arc::new(Metrics::default()),
    }
}
