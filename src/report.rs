//! Output formatting: path length, then the 1-indexed path.

use std::fmt;

/// Printable form of a reconstructed path.
///
/// ```
/// use hop_dp::report::Report;
///
/// let report = Report::new(&[0, 2, 4, 5]);
/// assert_eq!(report.to_string(), "4\n1 3 5 6\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report<'a> {
    path: &'a [usize],
}

impl<'a> Report<'a> {
    pub fn new(path: &'a [usize]) -> Self {
        Self { path }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.path.len())?;
        for (k, idx) in self.path.iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", idx + 1)?;
        }
        writeln!(f)
    }
}

/// Render `path` in the two-line output format.
pub fn format_report(path: &[usize]) -> String {
    Report::new(path).to_string()
}
