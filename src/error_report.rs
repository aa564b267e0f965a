use std::fmt;
use std::io::{self, Write};
use std::error::Error;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{Files, SimpleFile};
use codespan_reporting::term::termcolor::WriteColor;
use crate::layout::{LoadTomlError, LoadTomlErrorSource};
use crate::generator::GenerateError;

pub trait IntoDiagnostic: Sized {
    fn into_diagnostic<FileId: Copy>(self, file_id: FileId) -> Diagnostic<FileId>;
}

pub trait Report {
    fn report<Name: fmt::Display + Clone, Source: AsRef<str>>(self, name: Name, source: Source) -> !;
}

impl<T: IntoDiagnostic> Report for T {
    fn report<Name: fmt::Display + Clone, Source: AsRef<str>>(self, name: Name, source: Source) -> ! {
        use codespan_reporting::term::termcolor::{StandardStream, ColorChoice};

        let diagnostic = self.into_diagnostic(());
        let file = SimpleFile::new(name, source);
        let mut out = StandardStream::stderr(ColorChoice::Auto);
        emit(&mut out, io::stderr(), &file, &diagnostic);
        std::process::exit(1);
    }
}

/// Emits `diagnostic` to `out`, falling back to a plain message in `fallback`.
fn emit<'files, F: Files<'files>, W: io::Write>(out: &mut dyn WriteColor, mut fallback: W, files: &'files F, diagnostic: &Diagnostic<F::FileId>) {
    if codespan_reporting::term::emit(out, &Default::default(), files, diagnostic).is_err() {
        let _ = writeln!(fallback, "error: {}", diagnostic.message);
    }
}

fn causes(error: &dyn Error) -> Vec<String> {
    let mut notes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        notes.push(format!("caused by: {}", cause));
        source = cause.source();
    }
    notes
}

/// Byte offset of a zero-based line and byte column.
///
/// The column is clamped to the end of the line and moved back to the nearest
/// char boundary.
fn offset_of(text: &str, line: usize, col: usize) -> usize {
    let line_start = text
        .split_inclusive('\n')
        .take(line)
        .map(str::len)
        .sum::<usize>();
    let line_len = text[line_start..].find('\n').unwrap_or(text.len() - line_start);
    let mut offset = line_start + col.min(line_len);
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

impl IntoDiagnostic for LoadTomlError {
    fn into_diagnostic<FileId: Copy>(self, file_id: FileId) -> Diagnostic<FileId> {
        let message = self.to_string();
        match self.inner {
            LoadTomlErrorSource::Read(error) => {
                Diagnostic::error()
                    .with_message(message)
                    .with_notes(vec![format!("caused by: {}", error)])
            },
            LoadTomlErrorSource::Parse { error, contents } => {
                let diagnostic = Diagnostic::error().with_message(message);
                match error.line_col() {
                    Some((line, col)) => {
                        let start = offset_of(&contents, line, col);
                        let end = contents[start..].chars().next().map_or(start, |c| start + c.len_utf8());
                        diagnostic.with_labels(vec![Label::primary(file_id, start..end).with_message(error.to_string())])
                    },
                    None => diagnostic.with_notes(vec![error.to_string()]),
                }
            },
        }
    }
}

impl IntoDiagnostic for GenerateError {
    fn into_diagnostic<FileId: Copy>(self, _file_id: FileId) -> Diagnostic<FileId> {
        Diagnostic::error()
            .with_message(self.to_string())
            .with_notes(causes(&self))
    }
}
