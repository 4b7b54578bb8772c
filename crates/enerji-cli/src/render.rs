//! Plain-text table layout.
//!
//! Widths are terminal columns, not bytes or chars, so Turkish letters and wide glyphs
//! line up.

use enerji_data::Table;
use enerji_grid::{Column, GridContext};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a cell may get before it is cut with an ellipsis.
pub const MAX_CELL_WIDTH: usize = 40;

const GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

impl Align {
    /// Formatted numbers read better right-aligned.
    fn for_column(column: &Column) -> Align {
        if column.render.is_some() && !column.is_name() {
            Align::Right
        } else {
            Align::Left
        }
    }
}

/// Cuts `s` to `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}

fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(s.width()));
    match align {
        Align::Left => format!("{s}{fill}"),
        Align::Right => format!("{fill}{s}"),
    }
}

/// Title, header, separator, rows in display order and the record count.
pub fn render_table(table: &Table, ctx: &GridContext) -> String {
    let columns = table.grid.columns();
    let aligns: Vec<Align> = columns.iter().map(Align::for_column).collect();
    let headers: Vec<String> = table
        .grid
        .headers()
        .into_iter()
        .map(|h| truncate_to_width(h, MAX_CELL_WIDTH))
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows(ctx)
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate_to_width(cell, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            rows.iter()
                .map(|row| row.get(i).map_or(0, |c| c.width()))
                .chain(std::iter::once(headers[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .zip(&aligns)
            .map(|((cell, width), align)| pad(cell, *width, *align))
            .collect::<Vec<_>>()
            .join(GAP)
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(table.title());
    out.push_str("\n\n");
    out.push_str(&line(&headers));
    out.push('\n');
    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rules.join(GAP));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&table.count_label(ctx.language()));
    out.push('\n');
    out
}
