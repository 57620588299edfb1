//! Clipboard sink
//!
//! The report side only decides *what* text gets copied; putting it on the
//! system clipboard is behind the [`ClipboardSink`] trait.

use std::fmt;

use crate::error::{ReportError, ReportResult};
use crate::models::GeneratedReport;

/// Which block of a generated report to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPart {
    /// The whole report, untrimmed
    #[default]
    Full,
    /// Header line, trimmed
    Part1,
    /// Body, trimmed
    Part2,
}

impl ReportPart {
    /// Parts in tab order
    pub const ALL: [ReportPart; 3] = [Self::Full, Self::Part1, Self::Part2];

    /// Text of this part as it should be pasted
    pub fn text<'a>(&self, report: &'a GeneratedReport) -> &'a str {
        match self {
            Self::Full => &report.full_report,
            Self::Part1 => report.part1_for_clipboard(),
            Self::Part2 => report.part2_for_clipboard(),
        }
    }

    /// Parse a part name (`full`, `part1`, `part2`, `1`, `2`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" | "all" => Some(Self::Full),
            "part1" | "1" | "header" => Some(Self::Part1),
            "part2" | "2" | "body" => Some(Self::Part2),
            _ => None,
        }
    }

    /// Next part in tab order
    pub fn next(&self) -> Self {
        match self {
            Self::Full => Self::Part1,
            Self::Part1 => Self::Part2,
            Self::Part2 => Self::Full,
        }
    }

    /// Previous part in tab order
    pub fn prev(&self) -> Self {
        match self {
            Self::Full => Self::Part2,
            Self::Part1 => Self::Full,
            Self::Part2 => Self::Part1,
        }
    }
}

impl fmt::Display for ReportPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "Full Report"),
            Self::Part1 => write!(f, "Part 1"),
            Self::Part2 => write!(f, "Part 2"),
        }
    }
}

/// Destination for copied text
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn copy_text(&mut self, text: &str) -> ReportResult<()>;
}

/// The operating system clipboard
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Create a handle; the OS clipboard is opened lazily on first copy
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> ReportResult<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ReportError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text.to_string())
                .map_err(|e| ReportError::Clipboard(e.to_string()))?;
        }
        Ok(())
    }
}

/// Copy one part of an optional report.
///
/// Fails with `NoReport` when nothing has been generated.
pub fn copy_part(
    report: Option<&GeneratedReport>,
    part: ReportPart,
    sink: &mut dyn ClipboardSink,
) -> ReportResult<()> {
    let report = report.ok_or_else(ReportError::no_report)?;
    sink.copy_text(part.text(report))?;
    tracing::debug!(part = %part, "copied report part");
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Sink that remembers what it was given
    #[derive(Default)]
    pub(crate) struct RecordingClipboard {
        pub copied: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn copy_text(&mut self, text: &str) -> ReportResult<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn report() -> GeneratedReport {
        GeneratedReport::new(
            "Ballas | Robbery | 01.01.2024 13:45 \n\n".into(),
            "Gang Name: Ballas\n\n=====\n".into(),
        )
    }

    #[test]
    fn test_copy_trims_parts() {
        let report = report();
        let mut sink = RecordingClipboard::default();

        copy_part(Some(&report), ReportPart::Part1, &mut sink).unwrap();
        copy_part(Some(&report), ReportPart::Part2, &mut sink).unwrap();
        copy_part(Some(&report), ReportPart::Full, &mut sink).unwrap();

        assert_eq!(sink.copied[0], "Ballas | Robbery | 01.01.2024 13:45");
        assert_eq!(sink.copied[1], "Gang Name: Ballas\n\n=====");
        assert_eq!(sink.copied[2], report.full_report);
    }

    #[test]
    fn test_copy_without_report() {
        let mut sink = RecordingClipboard::default();
        let err = copy_part(None, ReportPart::Part1, &mut sink).unwrap_err();
        assert!(err.is_no_report());
        assert!(sink.copied.is_empty());
    }

    #[test]
    fn test_part_parse_and_cycle() {
        assert_eq!(ReportPart::parse("part1"), Some(ReportPart::Part1));
        assert_eq!(ReportPart::parse("2"), Some(ReportPart::Part2));
        assert_eq!(ReportPart::parse("FULL"), Some(ReportPart::Full));
        assert_eq!(ReportPart::parse("part3"), None);
        assert_eq!(ReportPart::Part2.next(), ReportPart::Full);
    }
}
