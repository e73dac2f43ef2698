//! Error tree formatting utilities.

use alloc::string::String;
use core::fmt::Write;

use crate::types::{Error, ErrorKind};

/// Configuration-based error tree formatter.
///
/// The compact form renders a tree on one line, following each error with its
/// causes (`outer -> inner`, siblings wrapped in parentheses). The multiline
/// form renders one error per line, indented by depth.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, ErrorFormatConfig};
///
/// let err = Error::with_causes("invalid", [Error::new("a"), Error::new("b")]);
///
/// assert_eq!(err.format_with(&ErrorFormatConfig::compact()), "invalid -> (a; b)");
/// assert_eq!(err.format_with(&ErrorFormatConfig::pretty()), "invalid\n  - a\n  - b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub cause_separator: String,
    pub indent: String,
    pub bullet: String,
    pub multiline: bool,
    pub show_kind: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            cause_separator: " -> ".into(),
            indent: "  ".into(),
            bullet: "- ".into(),
            multiline: false,
            show_kind: true,
        }
    }
}

impl ErrorFormatConfig {
    /// Single-line rendering, used by `Display`.
    #[inline]
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented multiline rendering, used by the alternate `Display` (`{:#}`).
    #[inline]
    pub fn pretty() -> Self {
        Self { multiline: true, ..Default::default() }
    }

    /// Single-line rendering that omits index, member and context prefixes.
    #[inline]
    pub fn plain() -> Self {
        Self { show_kind: false, ..Default::default() }
    }

    /// Renders `error` according to this configuration.
    pub fn render(&self, error: &Error) -> String {
        let mut out = String::with_capacity(error.message.len() + 16);
        if self.multiline {
            self.write_lines(&mut out, error, 0);
        } else {
            self.write_compact(&mut out, error);
        }
        out
    }

    fn write_label(&self, out: &mut String, error: &Error) {
        if self.show_kind {
            let _ = match &error.kind {
                ErrorKind::Index { index } => write!(out, "[{}] ", index),
                ErrorKind::Member { name } => write!(out, "{}: ", name),
                ErrorKind::Context { label } => write!(out, "{}: ", label),
                ErrorKind::Domain | ErrorKind::Exceptional(_) => Ok(()),
            };
        }
        out.push_str(&error.message);
    }

    fn write_compact(&self, out: &mut String, error: &Error) {
        self.write_label(out, error);

        match error.inner_errors.as_slice() {
            [] => {},
            [cause] => {
                out.push_str(&self.cause_separator);
                self.write_compact(out, cause);
            },
            causes => {
                out.push_str(&self.cause_separator);
                out.push('(');
                for (i, cause) in causes.iter().enumerate() {
                    if i > 0 {
                        out.push_str(&self.separator);
                    }
                    self.write_compact(out, cause);
                }
                out.push(')');
            },
        }
    }

    fn write_lines(&self, out: &mut String, error: &Error, depth: usize) {
        if depth > 0 {
            out.push('\n');
            for _ in 0..depth {
                out.push_str(&self.indent);
            }
            out.push_str(&self.bullet);
        }
        self.write_label(out, error);

        for cause in &error.inner_errors {
            self.write_lines(out, cause, depth + 1);
        }
    }
}
