use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use xee_interpreter::error::SpannedError;

use crate::error::Error;

/// Write a human readable report of `error` to `w`.
///
/// Parse and stylesheet errors are shown against the source text they came
/// from. `color` toggles ANSI colors.
pub fn write_error<W: Write>(error: &Error, color: bool, mut w: W) -> io::Result<()> {
    match error {
        Error::Parse { path, src, source } => {
            let span = source.span();
            write_source_report(path, src, None, span.range(), &source.to_string(), color, w)
        }
        Error::Stylesheet { path, src, source } => {
            let range = source.span.as_ref().map(|span| span.range()).unwrap_or(0..0);
            write_source_report(
                path,
                src,
                Some(source.error.code()),
                range,
                source.error.message(),
                color,
                &mut w,
            )?;
            write_note(source, w)
        }
        Error::Transform { path, source } => {
            writeln!(
                w,
                "error[{}]: transform of {} failed: {}",
                source.error.code(),
                path.display(),
                source.error.message()
            )?;
            write_note(source, w)
        }
        Error::Usage(message) => writeln!(w, "{}", message),
        _ => writeln!(w, "error: {}", error),
    }
}

fn write_source_report<W: Write>(
    path: &Path,
    src: &str,
    code: Option<String>,
    range: Range<usize>,
    message: &str,
    color: bool,
    w: W,
) -> io::Result<()> {
    let id = path.display().to_string();
    let mut report = Report::build(ReportKind::Error, (id.clone(), range.clone()))
        .with_config(Config::default().with_color(color))
        .with_message(format!("cannot process {}", id));
    if let Some(code) = code {
        report = report.with_code(code);
    }
    report = report.with_label(
        Label::new((id.clone(), range))
            .with_message(message)
            .with_color(Color::Red),
    );
    report.finish().write((id, Source::from(src)), w)
}

fn write_note<W: Write>(error: &SpannedError, mut w: W) -> io::Result<()> {
    let note = error.error.note();
    if !note.is_empty() {
        writeln!(w, "{}", note)?;
    }
    Ok(())
}
