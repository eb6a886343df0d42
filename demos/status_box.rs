//! Status Box Demo - colored, wide-glyph content framed in every border style.
//!
//! ```bash
//! cargo run --example status_box
//! cargo run --example status_box -- '{"borderStyle": "double", "padding": 1, "indent": 2}'
//! ```

use boxline::logging::{LogLevel, MemorySink};
use boxline::{BorderStyle, BoxOptions, BoxRenderer, Logger, print_ascii_box};
use crossterm::style::Stylize;

fn main() -> boxline::Result<()> {
    let lines = vec![
        format!("{} build finished", "✓".green().bold()),
        format!("{} 2 warnings", "⚠\u{FE0F}".yellow()),
        format!("{} 0 errors", "❌".red()),
        "📦 boxline 0.2.1  🚀 ready".to_string(),
        "中文 / 日本語 / 한국어".to_string(),
    ];

    let custom = std::env::args()
        .nth(1)
        .map(|json| BoxOptions::from_json_str(&json))
        .transpose()?;

    let sink = MemorySink::new();
    let logger = Logger::new(sink.clone()).with_min_level(LogLevel::Debug);
    let mut stdout = std::io::stdout();

    match custom {
        Some(options) => {
            let mut renderer = BoxRenderer::new(options).with_logger(logger);
            renderer.write(&mut stdout, &lines)?;
        }
        None => {
            for style in BorderStyle::ALL {
                println!("{}", style.as_str().bold());
                let options = BoxOptions::default().with_border_style(style).with_indent(2);
                let mut renderer = BoxRenderer::new(options).with_logger(logger.clone());
                renderer.write(&mut stdout, &lines)?;
            }
            println!("{}", "ascii convenience".bold());
            print_ascii_box(&["plain", "text"])?;
        }
    }

    for event in sink.events() {
        eprintln!("{}", serde_json::to_string(&event).map_err(boxline::BoxError::Config)?);
    }
    Ok(())
}
