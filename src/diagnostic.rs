//! Non-fatal problems found while converting, and where they get reported.

use std::{
    fmt,
    io::{self, Write},
};

/// A recoverable problem with the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A Braille cell with no BRF equivalent. It was replaced with the placeholder.
    UnmappedGlyph { glyph: char },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::UnmappedGlyph { glyph } => write!(
                f,
                "⚠ Warning: Unmapped Braille symbol '{}' (U+{:04X})",
                glyph, *glyph as u32
            ),
        }
    }
}

/// Something that receives diagnostics during a conversion.
pub trait Sink {
    /// Record one diagnostic. Reporting can't fail or stop the conversion.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Sink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ignore;

impl Sink for Ignore {
    fn report(&mut self, _: Diagnostic) {}
}

/// Writes each diagnostic as its own line.
///
/// Write failures are dropped: losing a warning shouldn't stop a conversion.
///
/// # Examples
///
/// ```rust
/// # use unibrf::diagnostic::{Diagnostic, Sink, WriterSink};
/// let mut sink = WriterSink::new(Vec::new());
/// sink.report(Diagnostic::UnmappedGlyph { glyph: '⣿' });
/// assert_eq!(
///     "⚠ Warning: Unmapped Braille symbol '⣿' (U+28FF)\n",
///     String::from_utf8(sink.into_inner()).unwrap(),
/// );
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if let Err(err) = writeln!(self.writer, "{}", diagnostic) {
            log::debug!("couldn't write diagnostic: {}", err);
        }
    }
}

/// A sink writing to the process's standard error.
pub fn stderr() -> WriterSink<io::Stderr> {
    WriterSink::new(io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unmapped_glyph_message_pads_code_point() {
        let diagnostic = Diagnostic::UnmappedGlyph { glyph: '⡀' };
        assert_eq!(
            diagnostic.to_string(),
            "⚠ Warning: Unmapped Braille symbol '⡀' (U+2840)"
        );
    }

    #[test]
    fn vec_collects_in_order() {
        let mut sink = Vec::new();
        sink.report(Diagnostic::UnmappedGlyph { glyph: '⡀' });
        sink.report(Diagnostic::UnmappedGlyph { glyph: '⣿' });
        assert_eq!(
            sink,
            vec![
                Diagnostic::UnmappedGlyph { glyph: '⡀' },
                Diagnostic::UnmappedGlyph { glyph: '⣿' },
            ]
        );
    }

    #[test]
    fn writer_sink_writes_one_line_each() {
        let mut sink = WriterSink::new(Vec::new());
        sink.report(Diagnostic::UnmappedGlyph { glyph: '⡀' });
        sink.report(Diagnostic::UnmappedGlyph { glyph: '⣿' });
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("(U+28FF)\n"));
    }

    #[test]
    fn writer_sink_ignores_write_errors() {
        let mut sink = WriterSink::new(FailingWriter);
        sink.report(Diagnostic::UnmappedGlyph { glyph: '⡀' });
    }

    #[test]
    fn borrowed_sink_reports_to_owner() {
        fn report_one<S: Sink>(mut sink: S) {
            sink.report(Diagnostic::UnmappedGlyph { glyph: '⡀' });
        }

        let mut diagnostics = Vec::new();
        report_one(&mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
    }
}
