//! Blinking caret (stateless, computed from time only).

use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Glyph drawn after the typewriter text.
pub const CARET: &str = "|";

/// Full on/off period of the caret blink.
pub const CARET_PERIOD_MS: u64 = 1000;

/// Whether the caret is lit at `elapsed_ms`. It is on for the first half of
/// every period.
pub fn caret_visible(elapsed_ms: u64) -> bool {
    elapsed_ms % CARET_PERIOD_MS < CARET_PERIOD_MS / 2
}

/// Render the caret for the current moment.
pub fn render_caret(elapsed_ms: u64, color: Color) -> Span<'static> {
    if caret_visible(elapsed_ms) {
        Span::styled(CARET, Style::new().fg(color))
    } else {
        Span::raw(" ")
    }
}
