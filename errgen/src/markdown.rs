use crate::Model;

const HEADERS: [&str; 3] = ["Status", "Code", "Message"];

/// A value to be centered within a column of `width` characters.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub value: &'a str,
    pub width: usize,
}

impl Cell<'_> {
    pub fn render(&self) -> String {
        align_center(self.value, self.width)
    }
}

/// Renders the error table as a GitHub-flavored Markdown table with
/// Status, Code and Message columns.
pub fn render_markdown(model: &Model) -> String {
    let rows: Vec<[String; 3]> = model
        .errors
        .iter()
        .map(|(_, def)| {
            [
                def.status.to_string(),
                def.code.to_string(),
                escape_cell(&def.message),
            ]
        })
        .collect();
    let widths = column_widths(&rows);

    let mut out = String::new();
    write_row(&mut out, &HEADERS, &widths);
    out.push('|');
    for width in widths {
        out.push_str(&"-".repeat(width));
        out.push('|');
    }
    out.push('\n');
    for row in &rows {
        let values = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
        write_row(&mut out, &values, &widths);
    }
    out
}

/// Width of each column: the longest of header and values, plus two.
fn column_widths(rows: &[[String; 3]]) -> [usize; 3] {
    let mut widths = HEADERS.map(display_len);
    for row in rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_len(value));
        }
    }
    widths.map(|w| w + 2)
}

fn write_row(out: &mut String, values: &[&str; 3], widths: &[usize; 3]) {
    out.push('|');
    for (&value, &width) in values.iter().zip(widths) {
        out.push_str(&Cell { value, width }.render());
        out.push('|');
    }
    out.push('\n');
}

/// Centers `value` in `width` characters; an odd leftover space goes right.
pub fn align_center(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_len(value));
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), value, " ".repeat(right))
}

/// Keeps a value inside one table cell: pipes are escaped and line breaks
/// become `<br>`.
pub fn escape_cell(value: &str) -> String {
    value
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
        .replace('|', "\\|")
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}
