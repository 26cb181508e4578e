use core::fmt;
use std::ops::Range;

use nom::{
    bytes::complete::take_till1,
    character::complete::{char, digit1, space0, space1},
    combinator::{eof, map_res, opt},
    sequence::{pair, preceded, tuple},
    IResult,
};
use thiserror::Error;

type Result<T> = std::result::Result<T, StreamError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("line {line}: failed to parse span stream")]
    InvalidStreamFormat { line: usize },

    #[error("line {line}: there can't be more than one foreground or background color at the same time")]
    DuplicatedColorType { line: usize },

    #[error("line {line}: can't recognize color name or value")]
    UnknownColorType { line: usize },

    #[error("line {line}: failed to parse hex value")]
    InvalidHex { line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl Rgb {
    /// Accepts `#rrggbb` only.
    fn parse(s: &str, line: usize) -> Result<Rgb> {
        let Some(hex) = s.strip_prefix('#') else {
            return Err(StreamError::UnknownColorType { line });
        };
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StreamError::InvalidHex { line });
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| StreamError::InvalidHex { line })
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Foreground/background pair. Either side may be missing.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FbColor {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl FbColor {
    pub fn css_style(&self) -> String {
        match (self.fg, self.bg) {
            (None, None) => String::new(),
            (Some(fg), None) => format!("color: {fg}"),
            (None, Some(bg)) => format!("background-color: {bg}"),
            (Some(fg), Some(bg)) => format!("color: {fg}; background-color: {bg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredSpan {
    pub span: Range<usize>,
    pub color: FbColor,
}

#[derive(Debug, PartialEq, Eq)]
struct RawColor<'a> {
    background: bool,
    value: &'a str,
}

#[derive(Debug, PartialEq, Eq)]
struct RawSpan<'a> {
    start: usize,
    end: usize,
    first: RawColor<'a>,
    second: Option<RawColor<'a>>,
}

fn parse_offset(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(input)
}

fn parse_color(input: &str) -> IResult<&str, RawColor<'_>> {
    let (rem, (bang, value)) = pair(
        opt(char('!')),
        take_till1(|c: char| c == ' ' || c == '\t'),
    )(input)?;
    Ok((rem, RawColor { background: bang.is_some(), value }))
}

fn parse_raw_span(input: &str) -> IResult<&str, RawSpan<'_>> {
    let (rem, (_, start, _, end, _, first, second, _, _)) = tuple((
        space0,
        parse_offset,
        space1,
        parse_offset,
        space1,
        parse_color,
        opt(preceded(space1, parse_color)),
        space0,
        eof,
    ))(input)?;
    Ok((rem, RawSpan { start, end, first, second }))
}

/// Parses one stream line. `line` is only used for error reporting.
pub fn parse_line(input: &str, line: usize) -> Result<ColoredSpan> {
    let input = input.strip_suffix('\r').unwrap_or(input);
    let (_, raw) = parse_raw_span(input).map_err(|_| StreamError::InvalidStreamFormat { line })?;

    let first = Rgb::parse(raw.first.value, line)?;
    let mut color = FbColor::default();
    if raw.first.background {
        color.bg = Some(first);
    } else {
        color.fg = Some(first);
    }

    if let Some(second) = raw.second {
        // one foreground, one background
        if second.background == raw.first.background {
            return Err(StreamError::DuplicatedColorType { line });
        }
        let rgb = Rgb::parse(second.value, line)?;
        if second.background {
            color.bg = Some(rgb);
        } else {
            color.fg = Some(rgb);
        }
    }

    Ok(ColoredSpan {
        span: raw.start..raw.end,
        color,
    })
}

/// Lazily parses a whole stream, skipping blank lines.
pub fn spans(input: &str) -> impl Iterator<Item = Result<ColoredSpan>> + '_ {
    input
        .split('\n')
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| parse_line(text, idx + 1))
}

pub fn parse(input: &str) -> Result<Vec<ColoredSpan>> {
    spans(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_offset0() {
        assert_eq!(super::parse_offset("12 34"), IResult::Ok((" 34", 12)));
    }

    #[test]
    fn parse_offset1() {
        assert!(super::parse_offset("#12").is_err());
    }

    #[test]
    fn parse_color0() {
        assert_eq!(super::parse_color("#aabbcc"),
            IResult::Ok(("", RawColor { background: false, value: "#aabbcc" })));
    }

    #[test]
    fn parse_color1() {
        assert_eq!(super::parse_color("!#aabbcc\t#000000"),
            IResult::Ok(("\t#000000", RawColor { background: true, value: "#aabbcc" })));
    }

    #[test]
    fn parse_line_fg() {
        let span = parse_line("0 5 #c678dd", 1).unwrap();
        assert_eq!(span.span, 0..5);
        assert_eq!(span.color, FbColor { fg: Some(Rgb(0xc6, 0x78, 0xdd)), bg: None });
    }

    #[test]
    fn parse_line_bg_then_fg() {
        let span = parse_line("3\t9\t!#000000 #FFFFFF", 1).unwrap();
        assert_eq!(span.span, 3..9);
        assert_eq!(span.color, FbColor { fg: Some(Rgb(255, 255, 255)), bg: Some(Rgb(0, 0, 0)) });
    }

    #[test]
    fn parse_line_fg_then_bg() {
        let a = parse_line("1 2 #112233 !#445566", 1).unwrap();
        let b = parse_line("1 2 !#445566 #112233", 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_line_trailing_cr() {
        assert_eq!(parse_line("1 2 #112233\r", 1).unwrap().span, 1..2);
    }

    #[test]
    fn duplicated_color_type() {
        assert_eq!(parse_line("0 1 #000000 #ffffff", 4), Err(StreamError::DuplicatedColorType { line: 4 }));
        assert_eq!(parse_line("0 1 !#000000 !#ffffff", 4), Err(StreamError::DuplicatedColorType { line: 4 }));
    }

    #[test]
    fn unknown_color_type() {
        assert_eq!(parse_line("0 1 red", 2), Err(StreamError::UnknownColorType { line: 2 }));
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(parse_line("0 1 #12345", 2), Err(StreamError::InvalidHex { line: 2 }));
        assert_eq!(parse_line("0 1 #12345g", 2), Err(StreamError::InvalidHex { line: 2 }));
        assert_eq!(parse_line("0 1 #+12345", 2), Err(StreamError::InvalidHex { line: 2 }));
    }

    #[test]
    fn invalid_format() {
        assert_eq!(parse_line("0 #ffffff", 3), Err(StreamError::InvalidStreamFormat { line: 3 }));
        assert_eq!(parse_line("0 1", 3), Err(StreamError::InvalidStreamFormat { line: 3 }));
        assert_eq!(parse_line("0 1 #000000 !#ffffff #123456", 3), Err(StreamError::InvalidStreamFormat { line: 3 }));
    }

    #[test]
    fn parse_stream_skips_blank_lines() {
        let spans = parse("0 1 #000000\n\n  \n2 4 !#ffffff\n").unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].span, 2..4);
    }

    #[test]
    fn parse_stream_reports_line() {
        assert_eq!(parse("0 1 #000000\n\n2 x #ffffff"), Err(StreamError::InvalidStreamFormat { line: 3 }));
    }

    #[test]
    fn rgb_from_hex() {
        assert_eq!(Rgb::from(0xC678DD), Rgb(0xc6, 0x78, 0xdd));
        assert_eq!(Rgb::from(0x214365).to_string(), "#214365");
    }

    #[test]
    fn css_style() {
        let color = FbColor { fg: Some(Rgb(0x98, 0xc3, 0x79)), bg: Some(Rgb(0, 0, 0)) };
        assert_eq!(color.css_style(), "color: #98c379; background-color: #000000");
        assert_eq!(FbColor::default().css_style(), "");
    }
}
