use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_created: AtomicU64,
    events_deleted: AtomicU64,
    toothbrush_created: AtomicU64,
    import_requests: AtomicU64,
    import_rows: AtomicU64,
    store_errors: AtomicU64,
}

impl Metrics {
    pub fn record_event_created(&self) {
        self.events_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_deleted(&self) {
        self.events_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_toothbrush_created(&self) {
        self.toothbrush_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_import(&self, row_count: usize) {
        self.import_requests.fetch_add(1, Ordering::Relaxed);
        self.import_rows.fetch_add(row_count as u64, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn store_errors(&self) -> u64 {
        self.store_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let created = self.events_created.load(Ordering::Relaxed);
        let deleted = self.events_deleted.load(Ordering::Relaxed);
        let toothbrush = self.toothbrush_created.load(Ordering::Relaxed);
        let imports = self.import_requests.load(Ordering::Relaxed);
        let rows = self.import_rows.load(Ordering::Relaxed);
        let errors = self.store_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE lifelog_events_created_total counter\n\
lifelog_events_created_total {}\n\
# TYPE lifelog_events_deleted_total counter\n\
lifelog_events_deleted_total {}\n\
# TYPE lifelog_toothbrush_created_total counter\n\
lifelog_toothbrush_created_total {}\n\
# TYPE lifelog_import_requests_total counter\n\
lifelog_import_requests_total {}\n\
# TYPE lifelog_import_rows_total counter\n\
lifelog_import_rows_total {}\n\
# TYPE lifelog_store_errors_total counter\n\
lifelog_store_errors_total {}\n",
            created, deleted, toothbrush, imports, rows, errors
        )
    }
}
