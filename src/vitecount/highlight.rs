use std::ops::Range;

use thiserror::Error;

use crate::span_stream::{self, ColoredSpan, FbColor, StreamError};

type Result<T> = std::result::Result<T, HighlightError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("span {}..{} is outside the source", .span.start, .span.end)]
    OutOfBounds { span: Range<usize> },

    #[error("span {}..{} overlaps the previous span", .span.start, .span.end)]
    Overlap { span: Range<usize> },

    #[error("span {}..{} splits a character", .span.start, .span.end)]
    NotCharBoundary { span: Range<usize> },
}

/// A run of source text. Text outside every span has no color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: Option<FbColor>,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Segment { text: text.to_string(), color: None }
    }

    pub fn css_style(&self) -> String {
        self.color.map(|c| c.css_style()).unwrap_or_default()
    }
}

pub struct Highlighter<'a, I>
where
    I: Iterator<Item = std::result::Result<ColoredSpan, StreamError>>,
{
    source: &'a str,
    input: I,
}

impl<'a, I> Highlighter<'a, I>
where
    I: Iterator<Item = std::result::Result<ColoredSpan, StreamError>>,
{
    pub fn new(source: &'a str, input: I) -> Self {
        Highlighter { source, input }
    }

    pub fn highlight(self) -> Result<Vec<Segment>> {
        let source = self.source;
        let mut segments = Vec::new();
        let mut cursor = 0;

        for span in self.input {
            let ColoredSpan { span, color } = span?;

            if span.start > span.end || span.end > source.len() {
                return Err(HighlightError::OutOfBounds { span });
            }
            if span.start < cursor {
                return Err(HighlightError::Overlap { span });
            }
            if !source.is_char_boundary(span.start) || !source.is_char_boundary(span.end) {
                return Err(HighlightError::NotCharBoundary { span });
            }
            if span.is_empty() {
                continue;
            }

            if cursor < span.start {
                segments.push(Segment::plain(&source[cursor..span.start]));
            }
            segments.push(Segment {
                text: source[span.clone()].to_string(),
                color: Some(color),
            });
            cursor = span.end;
        }

        if cursor < source.len() {
            segments.push(Segment::plain(&source[cursor..]));
        }

        Ok(segments)
    }
}

/// Parses `stream` and applies it to `source`.
pub fn highlight(source: &str, stream: &str) -> Result<Vec<Segment>> {
    Highlighter::new(source, span_stream::spans(stream)).highlight()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span_stream::Rgb;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn no_spans() {
        let segments = highlight("const a = 1", "").unwrap();
        assert_eq!(segments, vec![Segment::plain("const a = 1")]);
    }

    #[test]
    fn empty_source() {
        assert!(highlight("", "").unwrap().is_empty());
    }

    #[test]
    fn gaps_are_plain() {
        let segments = highlight("let x = 1;", "0 3 #c678dd\n8 9 #d19a66").unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].text, "let");
        assert_eq!(segments[0].color.unwrap().fg, Some(Rgb(0xc6, 0x78, 0xdd)));
        assert_eq!(segments[1], Segment::plain(" x = "));
        assert_eq!(segments[2].text, "1");
        assert_eq!(segments[3], Segment::plain(";"));
    }

    #[test]
    fn covers_source_exactly_once() {
        let source = "import { useState } from 'react'";
        let segments = highlight(source, "0 6 #c678dd\n7 8 #3fd7a9\n9 17 #e06c75\n18 19 #3fd7a9\n20 24 #61afef\n25 32 #98c379").unwrap();
        assert_eq!(joined(&segments), source);
    }

    #[test]
    fn adjacent_spans() {
        let segments = highlight("ab", "0 1 #000000\n1 2 #ffffff").unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.color.is_some()));
    }

    #[test]
    fn empty_span_is_dropped() {
        let segments = highlight("ab", "1 1 #000000").unwrap();
        assert_eq!(segments, vec![Segment::plain("ab")]);

        let segments = highlight("abc", "0 1 #000000\n2 2 #ffffff").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], Segment::plain("bc"));
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(highlight("abc", "1 4 #000000"), Err(HighlightError::OutOfBounds { span: 1..4 }));
        assert_eq!(highlight("abc", "2 1 #000000"), Err(HighlightError::OutOfBounds { span: 2..1 }));
    }

    #[test]
    fn overlap() {
        assert_eq!(highlight("abcdef", "0 3 #000000\n2 4 #000000"), Err(HighlightError::Overlap { span: 2..4 }));
    }

    #[test]
    fn not_char_boundary() {
        assert_eq!(highlight("añb", "1 2 #000000"), Err(HighlightError::NotCharBoundary { span: 1..2 }));
    }

    #[test]
    fn stream_errors_pass_through() {
        let err = highlight("abc", "0 1 nope").unwrap_err();
        assert_eq!(err, HighlightError::Stream(StreamError::UnknownColorType { line: 1 }));
        assert_eq!(err.to_string(), "line 1: can't recognize color name or value");
    }

    #[test]
    fn segment_style() {
        let segments = highlight("ab", "0 1 !#214365").unwrap();
        assert_eq!(segments[0].css_style(), "background-color: #214365");
        assert_eq!(segments[1].css_style(), "");
    }
}
