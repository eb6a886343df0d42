use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated by a [`BoxRenderer`](crate::render::BoxRenderer).
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    renders: u64,
    empty_renders: u64,
    lines: u64,
    rows: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished box: `lines` content lines drawn as `rows` output rows.
    pub fn record_render(&mut self, lines: usize, rows: usize) {
        self.renders = self.renders.saturating_add(1);
        self.lines = self.lines.saturating_add(lines as u64);
        self.rows = self.rows.saturating_add(rows as u64);
    }

    pub fn record_empty(&mut self) {
        self.empty_renders = self.empty_renders.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            renders: self.renders,
            empty_renders: self.empty_renders,
            lines: self.lines,
            rows: self.rows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub renders: u64,
    pub empty_renders: u64,
    pub lines: u64,
    pub rows: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "render_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("empty_renders".to_string(), json!(self.empty_renders));
        map.insert("lines".to_string(), json!(self.lines));
        map.insert("rows".to_string(), json!(self.rows));
        map
    }
}
