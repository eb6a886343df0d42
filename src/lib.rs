//! ANSI-aware bordered text boxes for terminal output.
//!
//! Lines may carry SGR color codes and wide glyphs (CJK, emoji); widths are
//! estimated per terminal column so the right-hand border stays aligned.
//! The modules follow the `MODULE_SPEC` pattern: a small orchestrator
//! `mod.rs` re-exporting from a private `core` implementation.

pub mod ansi;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod width;

pub use ansi::{contains_ansi, strip_ansi, strip_ansi_complete};
pub use config::BoxOptions;
pub use error::{BoxError, Result};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use render::{
    BorderGlyphs, BorderStyle, BoxRenderer, print_ascii_box, print_box, print_box_with_options,
    render_box, write_box,
};
pub use width::{WidthStrategy, char_width, display_width, display_width_bytes, max_width};
