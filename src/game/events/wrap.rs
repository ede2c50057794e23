use crate::engine::renderer::Canvas;

/// Greedy word wrap: words are added to a line until the next one would
/// make it wider than `max_width`.
///
/// A single word wider than `max_width` gets a line of its own.
pub fn wrap_text(canvas: &dyn Canvas, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split(' ') {
        let test_line = format!("{}{} ", line, word);
        if canvas.measure_text(&test_line) > max_width && !line.is_empty() {
            lines.push(line.trim_end().to_string());
            line = format!("{} ", word);
        } else {
            line = test_line;
        }
    }
    lines.push(line.trim_end().to_string());

    lines
}
