//! Date template compilation and rendering.
//!
//! A template is scanned once into pieces. Placeholders are matched with this
//! precedence:
//!
//! | Token   | Output                                 |
//! |---------|----------------------------------------|
//! | `DOY`   | day-of-year, unpadded                  |
//! | `Y+`    | year, zero-padded to the run length    |
//! | `D+`    | day-of-month, zero-padded              |
//! | `Month` | full month name                        |
//! | `Mon`   | short month name                       |
//! | `M+`    | 1-based month number, zero-padded      |
//!
//! A `D` run never swallows the `D` of a following `DOY`, and an `M` run
//! never swallows the `M` of a following `Mon`/`Month`. Everything else is
//! copied through unchanged, and substituted values are never rescanned.

use crate::date::{DateParts, DnDate};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'f> {
    Literal(&'f str),
    DayOfYear,
    Year(usize),
    Day(usize),
    MonthName,
    MonthShortName,
    MonthNumber(usize),
}

/// A format string split into literal text and placeholders.
#[derive(Debug, Clone)]
pub(crate) struct Template<'f> {
    pieces: Vec<Piece<'f>>,
}

impl<'f> Template<'f> {
    pub(crate) fn compile(format: &'f str) -> Self {
        let bytes = format.as_bytes();
        let mut pieces = Vec::new();
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            // Placeholders are ASCII, so `i` is a char boundary whenever one starts here.
            let (piece, len) = match bytes[i] {
                b'D' | b'M' | b'Y' => placeholder_at(&format[i..]),
                _ => {
                    i += 1;
                    continue;
                }
            };
            if literal_start < i {
                pieces.push(Piece::Literal(&format[literal_start..i]));
            }
            pieces.push(piece);
            i += len;
            literal_start = i;
        }
        if literal_start < bytes.len() {
            pieces.push(Piece::Literal(&format[literal_start..]));
        }

        Self { pieces }
    }

    pub(crate) fn render(&self, date: DnDate, parts: &DateParts<'_>) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match *piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::DayOfYear => out.push_str(&date.day_of_year.to_string()),
                Piece::Year(width) => out.push_str(&format!("{:0width$}", date.year)),
                Piece::Day(width) => out.push_str(&format!("{:0width$}", parts.day_of_month)),
                Piece::MonthName => out.push_str(parts.month.full_name()),
                Piece::MonthShortName => out.push_str(parts.month.short_name()),
                Piece::MonthNumber(width) => {
                    out.push_str(&format!("{:0width$}", parts.month_number()))
                }
            }
        }
        out
    }
}

/// Resolves the placeholder starting at the head of `rest`.
fn placeholder_at(rest: &str) -> (Piece<'static>, usize) {
    if rest.starts_with("DOY") {
        return (Piece::DayOfYear, 3);
    }
    if rest.starts_with("Month") {
        return (Piece::MonthName, 5);
    }
    if rest.starts_with("Mon") {
        return (Piece::MonthShortName, 3);
    }
    match rest.as_bytes()[0] {
        b'Y' => {
            let n = run_len(rest, b'Y', |_| false);
            (Piece::Year(n), n)
        }
        b'D' => {
            let n = run_len(rest, b'D', |tail| tail.starts_with("DOY"));
            (Piece::Day(n), n)
        }
        _ => {
            let n = run_len(rest, b'M', |tail| tail.starts_with("Mon"));
            (Piece::MonthNumber(n), n)
        }
    }
}

/// Length of the run of `byte` at the head of `rest`, ending early where
/// `stop` matches the remaining text.
fn run_len(rest: &str, byte: u8, stop: impl Fn(&str) -> bool) -> usize {
    let bytes = rest.as_bytes();
    let mut n = 1;
    while n < bytes.len() && bytes[n] == byte && !stop(&rest[n..]) {
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    fn pieces(format: &str) -> Vec<Piece<'_>> {
        Template::compile(format).pieces
    }

    #[test]
    fn compile_iso_like() {
        assert_eq!(
            pieces("YYYY-MM-DD"),
            vec![
                Piece::Year(4),
                Piece::Literal("-"),
                Piece::MonthNumber(2),
                Piece::Literal("-"),
                Piece::Day(2),
            ]
        );
    }

    #[test]
    fn compile_names_take_precedence_over_m_runs() {
        assert_eq!(
            pieces("MMonth Mon"),
            vec![
                Piece::MonthNumber(1),
                Piece::MonthName,
                Piece::Literal(" "),
                Piece::MonthShortName,
            ]
        );
    }

    #[test]
    fn compile_doy_takes_precedence_over_d_runs() {
        assert_eq!(pieces("DDOY"), vec![Piece::Day(1), Piece::DayOfYear]);
        assert_eq!(pieces("DOYY"), vec![Piece::DayOfYear, Piece::Year(1)]);
    }

    #[test]
    fn compile_keeps_non_ascii_literals() {
        assert_eq!(
            pieces("Dé Mon"),
            vec![
                Piece::Day(1),
                Piece::Literal("é "),
                Piece::MonthShortName,
            ]
        );
    }

    #[test]
    fn render_substitutes_every_placeholder() {
        let month = Month::new("Duotember", "Duo", 22);
        let parts = DateParts {
            month: &month,
            month_index: 1,
            day_of_month: 2,
        };
        let date = DnDate::new(5813, 13);
        let rendered = Template::compile("DOY|YYYYYY|DDD|Month|Mon|MMM").render(date, &parts);
        assert_eq!(rendered, "13|005813|002|Duotember|Duo|002");
    }

    #[test]
    fn render_does_not_rescan_substituted_names() {
        let month = Month::new("May", "May", 31);
        let parts = DateParts {
            month: &month,
            month_index: 4,
            day_of_month: 1,
        };
        let rendered = Template::compile("Month ^^^^ ;;;;").render(DnDate::new(1, 121), &parts);
        assert_eq!(rendered, "May ^^^^ ;;;;");
    }

    #[test]
    fn render_negative_year_is_sign_aware() {
        let month = Month::new("Month 1", "M1", 11);
        let parts = DateParts {
            month: &month,
            month_index: 0,
            day_of_month: 1,
        };
        assert_eq!(
            Template::compile("YYYY").render(DnDate::new(-5, 1), &parts),
            "-005"
        );
    }
}
