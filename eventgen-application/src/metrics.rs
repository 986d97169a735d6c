use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct GenerationMetrics {
    weeks: AtomicU64,
    days: AtomicU64,
    parts: AtomicU64,
    events: AtomicU64,
    bytes_written: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub weeks: u64,
    pub days: u64,
    pub parts: u64,
    pub events: u64,
    pub bytes_written: u64,
}

impl GenerationMetrics {
    pub fn record_day(&self, part_count: usize, event_count: usize) {
        self.days.fetch_add(1, Ordering::Relaxed);
        self.parts.fetch_add(part_count as u64, Ordering::Relaxed);
        self.events.fetch_add(event_count as u64, Ordering::Relaxed);
    }

    pub fn record_week(&self, size_bytes: u64) {
        self.weeks.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(size_bytes, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            weeks: self.weeks.load(Ordering::Relaxed),
            days: self.days.load(Ordering::Relaxed),
            parts: self.parts.load(Ordering::Relaxed),
            events: self.events.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
        }
    }

    pub fn render_summary(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "weeks={} days={} parts={} events={} size={:.2} KB",
            snapshot.weeks,
            snapshot.days,
            snapshot.parts,
            snapshot.events,
            snapshot.bytes_written as f64 / 1024.0
        )
    }
}
