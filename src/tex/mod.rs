//! Small builders for the LaTeX snippets used in narration texts.

mod template;

pub use template::TexTemplate;

use std::fmt::Display;

/// `\name{arg1}{arg2}...`
#[must_use]
pub fn command(name: &str, args: &[&dyn Display]) -> String {
    let mut out = format!("\\{name}");
    for arg in args {
        out.push('{');
        out.push_str(&arg.to_string());
        out.push('}');
    }
    out
}

/// `\begin{name}content\end{name}`
#[must_use]
pub fn env(name: &str, content: &str) -> String {
    format!("\\begin{{{name}}}{content}\\end{{{name}}}")
}

/// `\frac{num}{den}`
#[must_use]
pub fn frac(num: impl Display, den: impl Display) -> String {
    command("frac", &[&num, &den])
}

/// Arrow over its argument, for vectors: `\overrightarrow{OM}`.
#[must_use]
pub fn vect(name: &str) -> String {
    command("overrightarrow", &[&name])
}

/// `\underset{var \to lim}{\to}`, the "tends to" arrow.
#[must_use]
pub fn tends_to(var: &str, lim: &str) -> String {
    command("underset", &[&format!("{var} \\to {lim}"), &"\\to"])
}

/// `\operatorname{name}`, for functions such as `ch` or `th`.
#[must_use]
pub fn operator(name: &str) -> String {
    command("operatorname", &[&name])
}

/// Upright differential `d`.
pub const D: &str = "\\text{d}";

/// How a flat list is laid out by [`vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Column,
    Row,
}

/// `pmatrix` from rows of cells.
#[must_use]
pub fn matrix<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .collect();
    env("pmatrix", &lines.join("\\\\"))
}

/// `pmatrix` from a flat list, laid out as a column or a row.
#[must_use]
pub fn vector<S: AsRef<str>>(cells: &[S], direction: Direction) -> String {
    let rows: Vec<Vec<&str>> = match direction {
        Direction::Column => cells.iter().map(|c| vec![c.as_ref()]).collect(),
        Direction::Row => vec![cells.iter().map(AsRef::as_ref).collect()],
    };
    matrix(&rows)
}

/// Column `pmatrix` of numbers, printing whole numbers without decimals.
#[must_use]
pub fn column(values: &[f64]) -> String {
    // `+ 0.0` folds a negative zero into `0`.
    let cells: Vec<String> = values.iter().map(|v| format!("{}", v + 0.0)).collect();
    vector(&cells, Direction::Column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_wraps_each_argument() {
        assert_eq!(command("frac", &[&1, &"t"]), "\\frac{1}{t}");
        assert_eq!(command("alpha", &[]), "\\alpha");
    }

    #[test]
    fn env_wraps_content() {
        assert_eq!(env("cases", "a \\\\ b"), "\\begin{cases}a \\\\ b\\end{cases}");
    }

    #[test]
    fn column_vector() {
        assert_eq!(
            vector(&["x(t)", "-y(t)"], Direction::Column),
            "\\begin{pmatrix}x(t)\\\\-y(t)\\end{pmatrix}"
        );
    }

    #[test]
    fn row_vector() {
        assert_eq!(
            vector(&["1", "2"], Direction::Row),
            "\\begin{pmatrix}1 & 2\\end{pmatrix}"
        );
    }

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(column(&[-3.0, -0.0]), "\\begin{pmatrix}-3\\\\0\\end{pmatrix}");
    }

    #[test]
    fn tends_to_arrow() {
        assert_eq!(
            tends_to("t", "+\\infty"),
            "\\underset{t \\to +\\infty}{\\to}"
        );
    }

    #[test]
    fn shortcuts() {
        assert_eq!(frac("\\pi", 2), "\\frac{\\pi}{2}");
        assert_eq!(vect("OM"), "\\overrightarrow{OM}");
        assert_eq!(operator("ch"), "\\operatorname{ch}");
    }
}
