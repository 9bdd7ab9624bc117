//! Titled, bordered text blocks with key/value rows.
//!
//! ```text
//! ╭─ Sequential Thinking ╮
//! │ Status:      Enabled │
//! │ Steps:       5       │
//! │ Description: test    │
//! ╰──────────────────────╯
//! ```
//!
//! `Display` renders plain text. `render_styled` adds terminal colors and is
//! the only output that depends on the environment (`NO_COLOR`, tty).

use colored::{Color, Colorize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

mod box_chars {
    pub const ROUND_TOP_LEFT: &str = "╭";
    pub const ROUND_TOP_RIGHT: &str = "╮";
    pub const ROUND_BOTTOM_LEFT: &str = "╰";
    pub const ROUND_BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const ARROW_RIGHT: &str = "▶";
}

/// Overall meaning of a block, drives the border color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Notice,
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Notice => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Free text line
    Text(String),
    /// `key: value`, nested under the previous row when `depth > 0`
    Field {
        key: String,
        value: String,
        depth: usize,
    },
}

/// A rendered-on-demand panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBlock {
    title: String,
    tone: Tone,
    rows: Vec<Row>,
}

impl DisplayBlock {
    pub fn new(title: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            tone,
            rows: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.rows.push(Row::Text(text.into()));
        self
    }

    pub fn field(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.nested(key, value, 0)
    }

    pub fn nested(mut self, key: impl Into<String>, value: impl Into<String>, depth: usize) -> Self {
        self.rows.push(Row::Field {
            key: key.into(),
            value: value.into(),
            depth,
        });
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Value of the first top-level field named `key`
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.rows.iter().find_map(|row| match row {
            Row::Field { key: k, value, depth: 0 } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Colored rendering for terminals
    pub fn render_styled(&self) -> String {
        self.render(true)
    }

    fn render(&self, styled: bool) -> String {
        let lines = self.content_lines(styled);
        let content_width = lines
            .iter()
            .map(|(plain, _)| plain.width())
            .max()
            .unwrap_or(0)
            .max(self.title.width() + 1);
        let inner = content_width + 2;

        let paint_border = |s: String| -> String {
            if styled {
                s.color(self.tone.color()).to_string()
            } else {
                s
            }
        };
        let title = if styled {
            self.title.bold().to_string()
        } else {
            self.title.clone()
        };

        let mut out = String::new();
        out.push_str(&paint_border(format!("{}{} ", box_chars::ROUND_TOP_LEFT, box_chars::HORIZONTAL)));
        out.push_str(&title);
        out.push_str(&paint_border(format!(
            " {}{}",
            box_chars::HORIZONTAL.repeat(inner - self.title.width() - 3),
            box_chars::ROUND_TOP_RIGHT
        )));
        out.push('\n');

        for (plain, rendered) in &lines {
            let padding = content_width - plain.width();
            out.push_str(&paint_border(box_chars::VERTICAL.to_string()));
            out.push(' ');
            out.push_str(rendered);
            out.push_str(&" ".repeat(padding));
            out.push(' ');
            out.push_str(&paint_border(box_chars::VERTICAL.to_string()));
            out.push('\n');
        }

        out.push_str(&paint_border(format!(
            "{}{}{}",
            box_chars::ROUND_BOTTOM_LEFT,
            box_chars::HORIZONTAL.repeat(inner),
            box_chars::ROUND_BOTTOM_RIGHT
        )));
        out.push('\n');
        out
    }

    /// (plain, rendered) pairs; width is always measured on the plain text
    fn content_lines(&self, styled: bool) -> Vec<(String, String)> {
        // Top-level keys are aligned into a column
        let key_width = self
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Field { key, depth: 0, .. } => Some(key.width() + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for row in &self.rows {
            match row {
                Row::Text(text) => {
                    for line in value_lines(text) {
                        let rendered = if styled {
                            line.color(self.tone.color()).to_string()
                        } else {
                            line.clone()
                        };
                        lines.push((line, rendered));
                    }
                }
                Row::Field { key, value, depth: 0 } => {
                    let label = format!("{}:", key);
                    let pad = " ".repeat(key_width - label.width() + 1);
                    let prefix = format!("{}{}", label, pad);
                    let rendered_prefix = if styled {
                        format!("{}{}", label.cyan(), pad)
                    } else {
                        prefix.clone()
                    };
                    push_value(&mut lines, &prefix, &rendered_prefix, value);
                }
                Row::Field { key, value, depth } => {
                    let indent = "  ".repeat(*depth);
                    let prefix = format!("{}{} {}: ", indent, box_chars::ARROW_RIGHT, key);
                    let rendered_prefix = if styled {
                        format!(
                            "{}{} {} ",
                            indent,
                            box_chars::ARROW_RIGHT.color(self.tone.color()),
                            format!("{}:", key).cyan()
                        )
                    } else {
                        prefix.clone()
                    };
                    push_value(&mut lines, &prefix, &rendered_prefix, value);
                }
            }
        }
        lines
    }
}

/// First line after the prefix, the rest aligned under it
fn push_value(lines: &mut Vec<(String, String)>, prefix: &str, rendered_prefix: &str, value: &str) {
    let continuation = " ".repeat(prefix.width());
    for (i, line) in value_lines(value).into_iter().enumerate() {
        if i == 0 {
            lines.push((format!("{}{}", prefix, line), format!("{}{}", rendered_prefix, line)));
        } else {
            let plain = format!("{}{}", continuation, line);
            lines.push((plain.clone(), plain));
        }
    }
}

/// Split on newlines; remaining control characters would break width math
fn value_lines(value: &str) -> Vec<String> {
    let mut lines: Vec<String> = value
        .lines()
        .map(|line| line.chars().map(|c| if c.is_control() { ' ' } else { c }).collect())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

impl fmt::Display for DisplayBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
