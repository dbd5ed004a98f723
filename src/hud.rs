//! Text overlay
//!
//! Two status lines at fixed canvas positions. On web they are DOM elements
//! pinned with `line_style`; native logs them.

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::SimState;

/// Overlay line positions in canvas pixels (left, baseline)
pub const STATUS_LINE_POS: [(f32, f32); 2] = [(10.0, 18.0), (10.0, 36.0)];

/// Score line and hint line
pub fn status_lines(state: &SimState) -> [String; 2] {
    [
        format!(
            "Emotion: PANIC  |  Stolen: {}  |  Hold mouse to spook",
            state.score
        ),
        "Tip: Move near top-right to increase panic".to_string(),
    ]
}

/// Inline CSS pinning overlay line `index` to its canvas position
///
/// Positions are percentages of the canvas so they follow CSS scaling. The
/// parent element is expected to wrap the canvas exactly.
pub fn line_style(index: usize) -> String {
    let (x, y) = STATUS_LINE_POS[index.min(STATUS_LINE_POS.len() - 1)];
    format!(
        "position:absolute;left:{:.2}%;top:{:.2}%;transform:translateY(-100%)",
        x / CANVAS_WIDTH * 100.0,
        y / CANVAS_HEIGHT * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_shows_score() {
        let mut state = SimState::empty();
        state.score = 7;
        let [status, tip] = status_lines(&state);
        assert!(status.contains("Stolen: 7"));
        assert!(tip.starts_with("Tip:"));
    }

    #[test]
    fn test_line_style_uses_canvas_percentages() {
        let style = line_style(1);
        // (10, 36) on a 480x320 canvas
        assert!(style.contains("left:2.08%"), "{style}");
        assert!(style.contains("top:11.25%"), "{style}");
        assert_eq!(line_style(5), style);
    }
}
