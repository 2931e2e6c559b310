use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Height of the fixed top nav, subtracted when scrolling an element into view.
pub const SCROLL_OFFSET_PX: f64 = 80.0;

/// Delay before scrolling to a freshly opened FAQ item, lets the panel start expanding first.
pub const SCROLL_DELAY_MS: u32 = 300;

/// Must match the `.faq-answer` collapse transition in the page stylesheet.
pub const ACCORDION_EXIT_MS: u32 = 300;

/// How many features a compact stage card previews.
pub const COMPACT_FEATURE_LIMIT: usize = 2;

pub const DEFAULT_FLOW_TITLE: &str = "Cómo funciona nuestro servicio";
