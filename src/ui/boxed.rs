//! Bordered text boxes.
//!
//! Layout is delegated to comfy-table (a single-cell table); colors are
//! applied afterwards so column widths are computed on plain text.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_BORDERS_ONLY, UTF8_BORDERS_ONLY};
use comfy_table::{Cell, CellAlignment, Table};

use super::style::{colorize, colorize_dimmed};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Single,
    Round,
    /// `+`, `-` and `|` only.
    Classic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Options for [`render_box`].
///
/// `padding` and `margin` count lines vertically and three columns per unit
/// horizontally, so a padding of 1 looks even in a terminal.
#[derive(Debug, Clone, Default)]
pub struct BoxOptions<'a> {
    pub padding: usize,
    pub margin: usize,
    pub border_color: Option<&'a str>,
    pub dim_border: bool,
    pub border_style: BorderStyle,
    pub align: Align,
    /// Color of the text inside the box.
    pub text_color: Option<&'a str>,
}

/// Wraps `text` in a bordered box.
pub fn render_box(text: &str, options: &BoxOptions<'_>) -> String {
    let vertical = "\n".repeat(options.padding);
    let horizontal = horizontal_padding(options.padding);

    let alignment = match options.align {
        Align::Left => CellAlignment::Left,
        Align::Center => CellAlignment::Center,
        Align::Right => CellAlignment::Right,
    };

    let mut table = Table::new();
    match options.border_style {
        BorderStyle::Single => {
            table.load_preset(UTF8_BORDERS_ONLY);
        }
        BorderStyle::Round => {
            table
                .load_preset(UTF8_BORDERS_ONLY)
                .apply_modifier(UTF8_ROUND_CORNERS);
        }
        BorderStyle::Classic => {
            table.load_preset(ASCII_BORDERS_ONLY);
        }
    }
    table.add_row(vec![
        Cell::new(format!("{vertical}{text}{vertical}")).set_alignment(alignment),
    ]);
    if let Some(column) = table.column_mut(0) {
        column.set_padding((horizontal, horizontal));
    }

    let indent = " ".repeat(options.margin * 3);
    let mut lines: Vec<String> = vec![String::new(); options.margin];
    lines.extend(
        table
            .lines()
            .map(|line| format!("{indent}{}", style_line(&line, options))),
    );
    lines.extend(vec![String::new(); options.margin]);

    lines.join("\n")
}

/// Colors the border characters and the text of one rendered line separately.
fn style_line(line: &str, options: &BoxOptions<'_>) -> String {
    let border = |s: &str| match (options.border_color, options.dim_border) {
        (Some(color), true) => colorize_dimmed(s, color),
        (Some(color), false) => colorize(s, color),
        (None, true) => colorize_dimmed(s, ""),
        (None, false) => s.to_string(),
    };
    let content = |s: &str| match options.text_color {
        Some(color) if !s.trim().is_empty() => colorize(s, color),
        _ => s.to_string(),
    };

    let mut chars = line.char_indices();
    let (Some((_, first)), Some((last_start, _))) = (chars.next(), chars.next_back()) else {
        return border(line);
    };

    if !is_vertical_border(first) {
        return border(line);
    }

    let inner_start = first.len_utf8();
    format!(
        "{}{}{}",
        border(&line[..inner_start]),
        content(&line[inner_start..last_start]),
        border(&line[last_start..])
    )
}

/// Columns of padding on each side, saturating at what comfy-table accepts.
fn horizontal_padding(padding: usize) -> u16 {
    u16::try_from(padding.saturating_mul(3)).unwrap_or(u16::MAX)
}

const fn is_vertical_border(c: char) -> bool {
    matches!(c, '|' | '│')
}
