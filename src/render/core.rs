use std::io::{self, Write};

use super::style::BorderGlyphs;
use crate::config::BoxOptions;
use crate::error::Result;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::RenderMetrics;

/// Log target for renderer events.
pub const RENDER_TARGET: &str = "boxline::render";

/// Log target for metric snapshots.
pub const METRICS_TARGET: &str = "boxline::metrics";

/// Rows of one assembled box, without line terminators.
struct BoxRows {
    rows: Vec<String>,
    content_width: usize,
}

impl BoxRows {
    fn empty() -> Self {
        Self {
            rows: Vec::new(),
            content_width: 0,
        }
    }

    fn into_text(self) -> String {
        let capacity = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for row in self.rows {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        for row in &self.rows {
            writeln!(writer, "{row}")?;
        }
        writer.flush()
    }
}

fn layout_rows<S: AsRef<str>>(lines: &[S], options: &BoxOptions) -> BoxRows {
    let Some(first) = lines.first() else {
        return BoxRows::empty();
    };

    let measure = options.width_strategy;
    let blank = " ".repeat(measure.measure(first.as_ref()));

    let mut content: Vec<&str> = Vec::with_capacity(lines.len() + 2 * options.padding);
    content.extend(std::iter::repeat_n(blank.as_str(), options.padding));
    content.extend(lines.iter().map(|line| line.as_ref()));
    content.extend(std::iter::repeat_n(blank.as_str(), options.padding));

    let widths: Vec<usize> = content.iter().map(|line| measure.measure(line)).collect();
    let content_width = widths.iter().copied().max().unwrap_or(0);

    let BorderGlyphs {
        top_left,
        top_right,
        bottom_left,
        bottom_right,
        horizontal,
        vertical,
    } = options.border_style.glyphs();

    let indent = " ".repeat(options.indent);
    let rule = horizontal.to_string().repeat(content_width + 2);

    let mut rows = Vec::with_capacity(content.len() + 2);
    rows.push(format!("{indent}{top_left}{rule}{top_right}"));
    for (line, width) in content.iter().zip(&widths) {
        let fill = " ".repeat(content_width - width);
        rows.push(format!("{indent}{vertical} {line}{fill} {vertical}"));
    }
    rows.push(format!("{indent}{bottom_left}{rule}{bottom_right}"));

    BoxRows {
        rows,
        content_width,
    }
}

/// Render `lines` inside a border. Returns an empty string for no lines.
///
/// `None` options resolve to the defaults: rounded border, no padding rows,
/// no indent. Every row, borders included, ends with `\n`.
pub fn render_box<S: AsRef<str>>(lines: &[S], options: Option<&BoxOptions>) -> String {
    layout_rows(lines, &BoxOptions::resolve(options)).into_text()
}

/// Write the rendered box to `writer`. Nothing is written for no lines.
pub fn write_box<S: AsRef<str>>(
    writer: &mut impl Write,
    lines: &[S],
    options: Option<&BoxOptions>,
) -> Result<()> {
    layout_rows(lines, &BoxOptions::resolve(options)).write_to(writer)?;
    Ok(())
}

/// Print a default-style box to stdout.
pub fn print_box<S: AsRef<str>>(lines: &[S]) -> Result<()> {
    print_box_with_options(lines, None)
}

pub fn print_box_with_options<S: AsRef<str>>(
    lines: &[S],
    options: Option<&BoxOptions>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_box(&mut handle, lines, options)
}

/// Print a box drawn only with `+`, `-` and `|`.
pub fn print_ascii_box<S: AsRef<str>>(lines: &[S]) -> Result<()> {
    print_box_with_options(lines, Some(&BoxOptions::ascii()))
}

/// Renderer that keeps its options, counts what it draws, and optionally
/// reports each box to a [`Logger`].
#[derive(Debug, Default)]
pub struct BoxRenderer {
    options: BoxOptions,
    logger: Option<Logger>,
    metrics: RenderMetrics,
}

impl BoxRenderer {
    pub fn new(options: BoxOptions) -> Self {
        Self {
            options,
            logger: None,
            metrics: RenderMetrics::new(),
        }
    }

    pub fn with_default() -> Self {
        Self::new(BoxOptions::default())
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn options(&self) -> &BoxOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut BoxOptions {
        &mut self.options
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    pub fn render<S: AsRef<str>>(&mut self, lines: &[S]) -> String {
        let rows = layout_rows(lines, &self.options);
        self.observe(lines.len(), &rows);
        rows.into_text()
    }

    pub fn write<S: AsRef<str>>(&mut self, writer: &mut impl Write, lines: &[S]) -> Result<()> {
        let rows = layout_rows(lines, &self.options);
        self.observe(lines.len(), &rows);
        rows.write_to(writer)?;
        Ok(())
    }

    /// Emit the current metric snapshot to the attached logger, if any.
    pub fn log_metrics(&self) -> Result<()> {
        if let Some(logger) = &self.logger {
            logger.log_event(self.metrics.snapshot().to_log_event(METRICS_TARGET))?;
        }
        Ok(())
    }

    fn observe(&mut self, line_count: usize, rows: &BoxRows) {
        if rows.rows.is_empty() {
            self.metrics.record_empty();
            return;
        }
        self.metrics.record_render(line_count, rows.rows.len());

        let Some(logger) = &self.logger else {
            return;
        };
        if !logger.enabled(LogLevel::Debug) {
            return;
        }
        let event = event_with_fields(
            LogLevel::Debug,
            RENDER_TARGET,
            "box_rendered",
            [
                json_kv("rows", rows.rows.len()),
                json_kv("content_width", rows.content_width),
                json_str("style", self.options.border_style.as_str()),
                json_kv("indent", self.options.indent),
            ],
        );
        // Sink errors are dropped; `log_metrics` surfaces them.
        logger.log_event(event).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::logging::{LogEvent, LogSink, LoggingError, LoggingResult, MemorySink, NullSink};
    use serde_json::json;

    struct FailingSink;

    impl LogSink for FailingSink {
        fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
            Err(LoggingError::Io(io::Error::other("sink closed")))
        }
    }
    use crate::render::BorderStyle;
    use crate::width::display_width;

    fn rows(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn single_line_default_box() {
        let out = render_box(&["hi"], None);
        assert_eq!(out, "┌────┐\n│ hi │\n└────┘\n");
    }

    #[test]
    fn rows_share_display_width() {
        let out = render_box(&["a", "longer line", "\x1b[32m中文\x1b[0m ✓"], None);
        let widths: Vec<usize> = rows(&out).iter().map(|r| display_width(r)).collect();
        assert_eq!(widths.len(), 5);
        assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
        assert_eq!(widths[0], "longer line".len() + 4);
    }

    #[test]
    fn ascii_style_uses_plain_glyphs() {
        let opts = BoxOptions::ascii();
        let out = render_box(&["a", "bcd"], Some(&opts));
        assert_eq!(out, "+-----+\n| a   |\n| bcd |\n+-----+\n");
    }

    #[test]
    fn double_style() {
        let opts = BoxOptions::default().with_border_style(BorderStyle::Double);
        let out = render_box(&["x"], Some(&opts));
        assert_eq!(out, "╔═══╗\n║ x ║\n╚═══╝\n");
    }

    #[test]
    fn padding_rows_match_first_line_width() {
        let opts = BoxOptions::default().with_padding(1);
        let out = render_box(&["abc", "a"], Some(&opts));
        assert_eq!(
            rows(&out),
            vec!["┌─────┐", "│     │", "│ abc │", "│ a   │", "│     │", "└─────┘"]
        );
    }

    #[test]
    fn padding_uses_display_width_of_colored_first_line() {
        let opts = BoxOptions::default().with_padding(1);
        let out = render_box(&["\x1b[31mab\x1b[0m"], Some(&opts));
        assert_eq!(rows(&out)[0], "┌────┐");
        assert_eq!(rows(&out)[1], "│    │");
    }

    #[test]
    fn indent_prefixes_every_row() {
        let opts = BoxOptions::default().with_indent(2);
        let out = render_box(&["ok"], Some(&opts));
        assert_eq!(out, "  ┌────┐\n  │ ok │\n  └────┘\n");
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(render_box::<&str>(&[], None), "");
        let mut buf = Vec::new();
        write_box::<&str>(&mut buf, &[], Some(&BoxOptions::ascii())).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn write_box_matches_render_box() {
        let lines = ["one", "two words"];
        let mut buf = Vec::new();
        write_box(&mut buf, &lines, None).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_box(&lines, None));
    }

    #[test]
    fn renderer_records_metrics_and_logs() {
        let sink = MemorySink::new();
        let mut renderer =
            BoxRenderer::new(BoxOptions::ascii()).with_logger(Logger::new(sink.clone()));

        renderer.render(&["a", "b"]);
        renderer.render::<&str>(&[]);

        let snap = renderer.metrics().snapshot();
        assert_eq!(snap.renders, 1);
        assert_eq!(snap.empty_renders, 1);
        assert_eq!(snap.lines, 2);
        assert_eq!(snap.rows, 4);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, RENDER_TARGET);
        assert_eq!(events[0].field("style"), Some(&json!("ascii")));
        assert_eq!(events[0].field("content_width"), Some(&json!(1)));
    }

    #[test]
    fn renderer_respects_logger_level() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone()).with_min_level(LogLevel::Info);
        let mut renderer = BoxRenderer::with_default().with_logger(logger);
        renderer.render(&["quiet"]);
        assert!(sink.is_empty());
        assert_eq!(renderer.metrics().snapshot().renders, 1);
    }

    #[test]
    fn log_metrics_emits_snapshot() {
        let sink = MemorySink::new();
        let mut renderer = BoxRenderer::with_default().with_logger(Logger::new(sink.clone()));
        renderer.render(&["one", "two"]);
        sink.clear();

        renderer.log_metrics().unwrap();
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, METRICS_TARGET);
        assert_eq!(events[0].field("renders"), Some(&json!(1)));
        assert_eq!(events[0].field("rows"), Some(&json!(4)));
    }

    #[test]
    fn sink_failure_keeps_output_but_surfaces_from_log_metrics() {
        let mut renderer = BoxRenderer::with_default().with_logger(Logger::new(FailingSink));
        assert_eq!(renderer.render(&["hi"]), "┌────┐\n│ hi │\n└────┘\n");

        let err = renderer.log_metrics().unwrap_err();
        assert!(matches!(err, BoxError::Logging(LoggingError::Io(_))));
    }

    #[test]
    fn null_sink_and_no_logger_are_silent() {
        let mut renderer = BoxRenderer::with_default().with_logger(Logger::new(NullSink));
        renderer.render(&["x"]);
        renderer.log_metrics().unwrap();
        BoxRenderer::with_default().log_metrics().unwrap();
    }
}
