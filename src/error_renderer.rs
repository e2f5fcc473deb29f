//! Error rendering using miette's graphical report handler
//!
//! Build errors carry a diagnostic code and, for most kinds, a help line.
//! These helpers turn them into the boxed reports miette prints.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use shuntyard::{BuildError, render_error};
///
/// let err = BuildError::UnbalancedGroup { delimiter: ")".into() };
/// render_error(&err);
/// ```
pub fn render_error(error: &dyn Diagnostic) {
    render_error_to(error, &mut std::io::stderr()).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &dyn Diagnostic, writer: &mut dyn Write) -> std::io::Result<()> {
    writer.write_all(render_error_to_string(error).as_bytes())
}

/// Render an error to a String (useful for logs, UIs, etc.)
pub fn render_error_to_string(error: &dyn Diagnostic) -> String {
    render_with_theme(error, GraphicalTheme::unicode())
}

/// Render an error to a String without color codes (useful for tests)
///
/// # Example
/// ```
/// use shuntyard::{BuildError, render_error_to_string_no_color};
///
/// let err = BuildError::UnknownKind { code: 9 };
/// let report = render_error_to_string_no_color(&err);
/// assert!(report.contains("shuntyard::unknown_kind"));
/// assert!(report.contains("unknown element kind #9"));
/// ```
pub fn render_error_to_string_no_color(error: &dyn Diagnostic) -> String {
    render_with_theme(error, GraphicalTheme::unicode_nocolor())
}

fn render_with_theme(error: &dyn Diagnostic, theme: GraphicalTheme) -> String {
    let mut out = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .render_report(&mut out, error)
        .is_err()
    {
        // Fall back to the plain message.
        out = error.to_string();
    }
    out
}
