//! Box renderer orchestrator.
//!
//! Border glyph selection lives in `style`; row assembly, writers, and the
//! stateful `BoxRenderer` live in the private `core` module.

mod core;
mod style;

pub use self::core::{
    BoxRenderer, METRICS_TARGET, RENDER_TARGET, print_ascii_box, print_box,
    print_box_with_options, render_box, write_box,
};
pub use style::{BorderGlyphs, BorderStyle};
