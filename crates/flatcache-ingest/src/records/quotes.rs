//! Strict quote checking for CSV input.
//!
//! The `csv` lexer accepts a `"` inside an unquoted field, text after a
//! closing quote, and a quoted field left open at end of input. None of
//! those are valid CSV, so [`QuoteGuard`] watches the raw bytes on their way
//! into the lexer and remembers the first offending record.

use std::io::{self, Read};
use std::path::Path;

use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteViolationKind {
    /// `"` inside a field that did not start with a quote.
    BareQuote,
    /// A closing quote followed by something other than a delimiter or a
    /// line end.
    ExtraneousQuote,
    /// End of input inside a quoted field.
    Unterminated,
}

impl QuoteViolationKind {
    fn message(self) -> &'static str {
        match self {
            QuoteViolationKind::BareQuote => "bare \" in non-quoted field",
            QuoteViolationKind::ExtraneousQuote => "extraneous or missing \" in quoted field",
            QuoteViolationKind::Unterminated => "unterminated quoted field at end of input",
        }
    }
}

/// The first quoting error seen in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuoteViolation {
    /// Zero-based index of the record, counting the header and skipping
    /// blank lines.
    pub record: u64,
    /// One-based line where the offending quote sits.
    pub line: u64,
    pub kind: QuoteViolationKind,
}

impl QuoteViolation {
    fn into_error(self, path: &Path) -> IngestError {
        let source = csv::Error::from(io::Error::new(
            io::ErrorKind::InvalidData,
            self.kind.message(),
        ));
        IngestError::CsvParse {
            path: path.to_path_buf(),
            line: Some(self.line),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Pass-through reader that tracks quote state over every byte read.
///
/// Record boundaries follow the `csv` reader defaults: `\r`, `\n` or `\r\n`
/// end a record and blank lines are not records.
#[derive(Debug)]
pub(crate) struct QuoteGuard<R> {
    inner: R,
    delimiter: u8,
    bom_matched: Option<usize>,
    state: State,
    in_record: bool,
    records: u64,
    line: u64,
    quote_line: u64,
    violation: Option<QuoteViolation>,
}

impl<R> QuoteGuard<R> {
    pub(crate) fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            bom_matched: Some(0),
            state: State::FieldStart,
            in_record: false,
            records: 0,
            line: 1,
            quote_line: 1,
            violation: None,
        }
    }

    pub(crate) fn violation(&self) -> Option<QuoteViolation> {
        self.violation
    }

    fn scan(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if self.violation.is_some() {
                return;
            }
            if let Some(matched) = self.bom_matched {
                if UTF8_BOM.get(matched) == Some(&b) {
                    self.bom_matched = (matched + 1 < UTF8_BOM.len()).then_some(matched + 1);
                    continue;
                }
                self.bom_matched = None;
            }
            let line_end = b == b'\n' || b == b'\r';
            match self.state {
                State::FieldStart => {
                    if b == b'"' {
                        self.in_record = true;
                        self.quote_line = self.line;
                        self.state = State::Quoted;
                    } else if line_end {
                        self.end_record();
                    } else {
                        self.in_record = true;
                        if b != self.delimiter {
                            self.state = State::Unquoted;
                        }
                    }
                }
                State::Unquoted => {
                    if b == b'"' {
                        self.flag(QuoteViolationKind::BareQuote, self.line);
                    } else if line_end {
                        self.end_record();
                    } else if b == self.delimiter {
                        self.state = State::FieldStart;
                    }
                }
                State::Quoted => {
                    if b == b'"' {
                        self.state = State::QuoteInQuoted;
                    }
                }
                State::QuoteInQuoted => {
                    if b == b'"' {
                        self.state = State::Quoted;
                    } else if line_end {
                        self.end_record();
                    } else if b == self.delimiter {
                        self.state = State::FieldStart;
                    } else {
                        self.flag(QuoteViolationKind::ExtraneousQuote, self.line);
                    }
                }
            }
            if b == b'\n' {
                self.line += 1;
            }
        }
    }

    fn finish(&mut self) {
        if self.violation.is_none() && self.state == State::Quoted {
            self.flag(QuoteViolationKind::Unterminated, self.quote_line);
        }
    }

    fn end_record(&mut self) {
        if self.in_record {
            self.records += 1;
            self.in_record = false;
        }
        self.state = State::FieldStart;
    }

    fn flag(&mut self, kind: QuoteViolationKind, line: u64) {
        self.violation = Some(QuoteViolation {
            record: self.records,
            line,
            kind,
        });
    }
}

impl<R: Read> Read for QuoteGuard<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 {
            self.finish();
        } else {
            self.scan(&buf[..n]);
        }
        Ok(n)
    }
}

/// Fails if the quote guard has seen a quoting error at or before record
/// `record`.
///
/// Call after the lexer has returned `record`: the lexer must read past every
/// byte of a record before yielding it, so any error inside it is known.
pub(crate) fn check_quotes<R: Read>(
    reader: &csv::Reader<QuoteGuard<R>>,
    record: u64,
    path: &Path,
) -> Result<()> {
    match reader.get_ref().violation() {
        Some(violation) if violation.record <= record => Err(violation.into_error(path)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(input: &str) -> Option<QuoteViolation> {
        let mut guard = QuoteGuard::new(input.as_bytes(), b',');
        io::copy(&mut guard, &mut io::sink()).unwrap();
        guard.violation()
    }

    #[test]
    fn test_well_formed_input() {
        assert_eq!(scan_all("a,b\n1,2\n\"x, y\",\"say \"\"hi\"\"\"\n"), None);
        assert_eq!(scan_all("a,\"multi\nline\"\r\n3,4"), None);
        assert_eq!(scan_all("a,\"\"\n,\n"), None);
    }

    #[test]
    fn test_unterminated_quote() {
        let violation = scan_all("a,b\n1,2\n3,4\n5,\"6\n").unwrap();
        assert_eq!(violation.kind, QuoteViolationKind::Unterminated);
        assert_eq!(violation.record, 3);
        assert_eq!(violation.line, 4);
    }

    #[test]
    fn test_bare_quote() {
        let violation = scan_all("a,b\n1,2\n3,4\n5,x\"y\n").unwrap();
        assert_eq!(violation.kind, QuoteViolationKind::BareQuote);
        assert_eq!(violation.record, 3);
    }

    #[test]
    fn test_text_after_closing_quote() {
        let violation = scan_all("a\n\"ab\"c\n").unwrap();
        assert_eq!(violation.kind, QuoteViolationKind::ExtraneousQuote);
        assert_eq!(violation.record, 1);
        assert_eq!(violation.line, 2);
    }

    #[test]
    fn test_blank_lines_do_not_count_as_records() {
        let violation = scan_all("a\n\n\r\n1\n\n2\"\n").unwrap();
        assert_eq!(violation.record, 2);
        assert_eq!(violation.line, 6);
    }

    #[test]
    fn test_leading_bom_is_skipped() {
        assert_eq!(scan_all("\u{feff}\"a\",b\n1,2\n"), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let mut guard = QuoteGuard::new("a;\"b;c\"\n1;\"2\"\n".as_bytes(), b';');
        io::copy(&mut guard, &mut io::sink()).unwrap();
        assert_eq!(guard.violation(), None);
    }
}
