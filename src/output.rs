//! Console output for the CLI.
//!
//! The `Console` is constructed once in `main` and passed to every
//! command; user-facing text goes through it, diagnostics go through
//! `tracing`. Tables are declared with fixed headers per command, not
//! derived from query metadata.

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    Plain,
    Green,
    Red,
}

impl Style {
    fn paint(self, text: &str) -> String {
        match self {
            Style::Plain => text.to_string(),
            Style::Green => format!("{GREEN}{text}{RESET}"),
            Style::Red => format!("{RED}{text}{RESET}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    style: Style,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Plain,
        }
    }

    pub fn green(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Green,
        }
    }

    pub fn red(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Red,
        }
    }
}

/// A titled grid with a fixed header row. Column widths follow the
/// widest cell; styles color the text only, so padding stays aligned.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    headers: &'static [&'static str],
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(title: impl Into<String>, headers: &'static [&'static str]) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].text.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let separator = {
            let mut line = String::from("+");
            for w in &widths {
                line.push_str(&"-".repeat(w + 2));
                line.push('+');
            }
            line
        };

        let mut out = String::new();
        let total = separator.chars().count();
        let title_len = self.title.chars().count();
        let left_pad = total.saturating_sub(title_len) / 2;
        out.push_str(&" ".repeat(left_pad));
        out.push_str(&format!("{BOLD}{}{RESET}\n", self.title));

        out.push_str(&separator);
        out.push('\n');
        out.push('|');
        for (header, &w) in self.headers.iter().zip(&widths) {
            out.push_str(&format!(" {BOLD}{header:<w$}{RESET} |"));
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');

        for row in &self.rows {
            out.push('|');
            for (cell, &w) in row.iter().zip(&widths) {
                let pad = w - cell.text.chars().count();
                out.push_str(&format!(" {}{} |", cell.style.paint(&cell.text), " ".repeat(pad)));
            }
            out.push('\n');
            out.push_str(&separator);
            out.push('\n');
        }
        out
    }
}

/// User-facing writer, passed into commands rather than shared as a
/// process-wide singleton. Success and notices go to stdout, errors to
/// stderr.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{GREEN}{message}{RESET}");
    }

    pub fn notice(&self, message: &str) {
        println!("{YELLOW}{message}{RESET}");
    }

    pub fn error(&self, message: &str) {
        eprintln!("{RED}{message}{RESET}");
    }

    pub fn table(&self, table: &Table) {
        println!();
        print!("{}", table.render());
    }

    pub fn summary(&self, label: &str, count: usize) {
        println!("\n{BOLD}{GREEN}{label}:{RESET} {count}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for esc in chars.by_ref() {
                    if esc == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn renders_headers_and_rows_aligned() {
        let mut table = Table::new("Accounts List", &["uuid", "identifier", "key"]);
        table.row(vec![
            Cell::plain("aaaa"),
            Cell::plain("alice"),
            Cell::green("CONNECTED"),
        ]);
        table.row(vec![
            Cell::plain("bb"),
            Cell::plain("bob"),
            Cell::red("NOT CONNECTED"),
        ]);

        let plain = strip_ansi(&table.render());
        let lines: Vec<&str> = plain.lines().collect();
        assert!(lines[0].trim_start().starts_with("Accounts List"));
        assert!(lines[2].contains("| uuid | identifier | key"));
        assert!(plain.contains("| alice"));
        assert!(plain.contains("| NOT CONNECTED |"));

        // every grid line has the same width
        let grid_width = lines[1].chars().count();
        for line in &lines[1..] {
            assert_eq!(line.chars().count(), grid_width);
        }
    }

    #[test]
    fn styled_cells_do_not_break_padding() {
        let mut table = Table::new("t", &["key"]);
        table.row(vec![Cell::green("CONNECTED")]);
        let raw = table.render();
        assert!(raw.contains("\x1b[32mCONNECTED\x1b[0m"));
        let plain = strip_ansi(&raw);
        for line in plain.lines().skip(1) {
            assert_eq!(line.chars().count(), plain.lines().nth(1).unwrap().chars().count());
        }
    }

    #[test]
    fn empty_table_still_renders_header_grid() {
        let table = Table::new("t", &["uuid", "public_key"]);
        let plain = strip_ansi(&table.render());
        assert!(plain.contains("| uuid | public_key |"));
        assert_eq!(plain.lines().count(), 4);
    }
}
