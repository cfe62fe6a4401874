pub mod shell;

pub use shell::*;

use crate::config::DEFAULT_MIN_PADDING;
use crate::segments::Segment;
use crate::themes::{Color, Symbols};

/// Which way a line grows from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Anchored left; each segment closes on its right edge.
    Left,
    /// Anchored right; each segment opens on its left edge.
    Right,
}

/// Segments for the three logical lines of a prompt, in drawing order.
#[derive(Debug, Clone, Default)]
pub struct PromptLines {
    pub left: Vec<Segment>,
    pub right: Vec<Segment>,
    pub down: Vec<Segment>,
}

impl PromptLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_left(&mut self, segment: Segment) {
        self.left.push(segment);
    }

    pub fn append_right(&mut self, segment: Segment) {
        self.right.push(segment);
    }

    pub fn append_down(&mut self, segment: Segment) {
        self.down.push(segment);
    }
}

/// A rendered line together with the columns it takes up on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub width: usize,
}

// Escapes go in as-is; text is quoted for the shell and counted.
struct LineWriter {
    shell: Shell,
    line: RenderedLine,
}

impl LineWriter {
    fn escape(&mut self, code: &str) {
        self.line.text.push_str(code);
    }

    fn text(&mut self, text: &str) {
        self.line.text.push_str(&self.shell.escape_text(text));
        self.line.width += text.chars().count();
    }
}

/// Serializes segments into one shell prompt string.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    shell: Shell,
    symbols: &'a Symbols,
    min_padding: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(shell: Shell, symbols: &'a Symbols) -> Self {
        Self {
            shell,
            symbols,
            min_padding: DEFAULT_MIN_PADDING,
        }
    }

    /// At least one space always separates the two groups.
    pub fn with_min_padding(mut self, min_padding: usize) -> Self {
        self.min_padding = min_padding.max(1);
        self
    }

    /// Left and right groups on the first row, padded out to `width`, then the
    /// secondary line and a trailing space.
    pub fn render(&self, lines: &PromptLines, width: &str) -> String {
        let left = self.measure_line(&lines.left, Direction::Left);
        let right = self.measure_line(&lines.right, Direction::Right);
        let down = self.render_line(&lines.down, Direction::Left);
        let padding = self.padding(width, left.width + right.width);

        let mut out = String::with_capacity(left.text.len() + padding + right.text.len() + down.len() + 2);
        out.push_str(&left.text);
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(&right.text);
        out.push_str(&self.symbols.new_line);
        out.push_str(&down);
        out.push(' ');
        out
    }

    /// Empty when no segment is visible; otherwise always ends with a reset.
    pub fn render_line(&self, segments: &[Segment], direction: Direction) -> String {
        self.measure_line(segments, direction).text
    }

    pub fn measure_line(&self, segments: &[Segment], direction: Direction) -> RenderedLine {
        let visible: Vec<&Segment> = segments.iter().filter(|segment| !segment.is_empty()).collect();
        if visible.is_empty() {
            return RenderedLine::default();
        }

        let mut out = LineWriter {
            shell: self.shell,
            line: RenderedLine::default(),
        };
        for (i, segment) in visible.iter().enumerate() {
            let next = visible.get(i + 1).copied();
            match direction {
                Direction::Left => self.push_left(&mut out, segment, next),
                Direction::Right => self.push_right(&mut out, segment),
            }
        }
        out.escape(self.shell.reset());
        out.line
    }

    /// Spaces between the left and right groups of the first row, given the
    /// columns they already use. No terminal is wider than `u16::MAX`.
    pub fn padding(&self, width: &str, used: usize) -> usize {
        match width.parse::<u16>() {
            Ok(width) => usize::from(width).checked_sub(used).unwrap_or(self.min_padding),
            Err(_) => self.min_padding,
        }
    }

    // The wedge is drawn in this segment's background on top of the next one's,
    // or on the terminal default when nothing follows.
    fn push_left(&self, out: &mut LineWriter, segment: &Segment, next: Option<&Segment>) {
        out.escape(&self.bg(segment.bg));
        out.escape(&self.fg(segment.fg));
        self.push_body(out, segment, &self.symbols.separator_thin);

        match next {
            Some(next) => out.escape(&self.bg(next.bg)),
            None => out.escape(self.shell.reset()),
        }
        out.escape(&self.fg(segment.bg));
        out.text(&self.symbols.separator);
    }

    // Opens against whatever background is already active.
    fn push_right(&self, out: &mut LineWriter, segment: &Segment) {
        out.escape(&self.fg(segment.bg));
        out.text(&self.symbols.separator_right);

        out.escape(&self.fg(segment.fg));
        out.escape(&self.bg(segment.bg));
        self.push_body(out, segment, &self.symbols.separator_thin_right);
    }

    // Between sub-parts the foreground switches color, so a default one has
    // to be restored explicitly.
    fn push_body(&self, out: &mut LineWriter, segment: &Segment, thin: &str) {
        for (i, part) in segment.visible_parts().enumerate() {
            if i > 0 {
                out.escape(&self.fg_or_reset(segment.separator_fg));
                out.text(thin);
                out.escape(&self.fg_or_reset(segment.fg));
            }
            out.text(&format!(" {} ", part));
        }
    }

    /// Default foreground leaves the current one in place.
    fn fg(&self, color: Color) -> String {
        match color {
            Color::Default => String::new(),
            Color::Indexed(code) => self.shell.color(Layer::Foreground, code),
        }
    }

    fn fg_or_reset(&self, color: Color) -> String {
        match color {
            Color::Default => self.shell.default_foreground().to_string(),
            Color::Indexed(code) => self.shell.color(Layer::Foreground, code),
        }
    }

    /// Default background means the terminal's own, reached through a reset.
    fn bg(&self, color: Color) -> String {
        match color {
            Color::Default => self.shell.reset().to_string(),
            Color::Indexed(code) => self.shell.color(Layer::Background, code),
        }
    }
}
