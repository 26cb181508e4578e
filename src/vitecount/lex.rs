//! A small JavaScript/TypeScript tokenizer that produces a colored span
//! stream for a source, using the One Dark palette.
//!
//! Comments and whitespace produce no spans. Characters no rule accepts are
//! skipped, so lexing never fails.

use std::ops::Range;

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until, take_while},
    character::complete::{anychar, char, digit1, hex_digit1, multispace1, one_of, satisfy},
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::{pair, preceded, tuple},
    IResult,
};

use crate::span_stream::{ColoredSpan, FbColor, Rgb};

const KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "continue", "debugger", "default", "do", "else",
    "finally", "for", "function", "if", "return", "switch", "throw", "try", "var", "let",
    "const", "while", "with", "new", "this", "super", "class", "extends", "export", "import",
    "yield", "in", "instanceof", "typeof", "void", "delete",
];

const KNOWN_IDENTS: &[&str] = &[
    "abstract", "as", "async", "from", "of", "type", "global", "static", "using", "readonly",
    "unique", "keyof", "declare", "enum", "is", "infer", "symbol", "undefined", "interface",
    "implements", "asserts", "require", "get", "set", "any", "intrinsic", "unknown", "string",
    "object", "number", "bigint", "boolean", "never", "assert", "namespace", "accessor", "meta",
    "target", "satisfies", "package", "protected", "private", "public",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    /// `null`, `true`, `false`
    Literal,
    KnownIdent,
    Ident,
    Str,
    Number,
    Paren,
    Bracket,
    Brace,
    Semi,
    /// `,` and `:`
    Separator,
    /// `?`, `++`, `--`, `~`
    Unary,
    Operator,
}

impl TokenKind {
    pub fn color(self) -> Rgb {
        let hex = match self {
            TokenKind::Keyword | TokenKind::Paren => 0xC678DD,
            TokenKind::Literal | TokenKind::Number => 0xD19A66,
            TokenKind::KnownIdent => 0x61AFEF,
            TokenKind::Ident => 0xE06C75,
            TokenKind::Str => 0x98C379,
            TokenKind::Brace => 0x3FD7A9,
            TokenKind::Semi => 0x214365,
            TokenKind::Separator | TokenKind::Unary => 0xABB2BF,
            TokenKind::Bracket | TokenKind::Operator => 0x56B6C2,
        };
        Rgb::from(hex)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

fn line_comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("//"), take_till(|c: char| c == '\n')))(input)
}

fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

fn quoted(input: &str, quote: char) -> IResult<&str, &str> {
    recognize(tuple((
        char(quote),
        many0(alt((
            preceded(char('\\'), anychar),
            // only template literals span lines
            satisfy(|c| c != quote && c != '\\' && (quote == '`' || c != '\n')),
        ))),
        char(quote),
    )))(input)
}

fn double_quoted(input: &str) -> IResult<&str, &str> {
    quoted(input, '"')
}

fn single_quoted(input: &str) -> IResult<&str, &str> {
    quoted(input, '\'')
}

fn template(input: &str) -> IResult<&str, &str> {
    quoted(input, '`')
}

fn string_literal(input: &str) -> IResult<&str, &str> {
    alt((double_quoted, single_quoted, template))(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(tag_no_case("0x"), hex_digit1)),
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
    ))(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_alphabetic() || c == '_' || c == '$'),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '$'),
    ))(input)
}

fn operator(input: &str) -> IResult<&str, &str> {
    // longest first
    alt((
        alt((
            tag(">>>="), tag("..."), tag("==="), tag("!=="), tag(">>>"), tag("<<="),
            tag(">>="), tag("**="), tag("&&="), tag("||="), tag("??="),
        )),
        alt((
            tag("=>"), tag("=="), tag("!="), tag("<="), tag(">="), tag("<<"), tag(">>"),
            tag("**"), tag("&&"), tag("||"), tag("??"), tag("?."), tag("++"), tag("--"),
            tag("+="), tag("-="), tag("*="), tag("/="), tag("%="), tag("&="),
        )),
        alt((
            tag("|="), tag("^="),
            recognize(one_of("(){}[];,:.#@!?~<>=+-*/%&|^")),
        )),
    ))(input)
}

fn classify_word(word: &str) -> TokenKind {
    match word {
        "null" | "true" | "false" => TokenKind::Literal,
        w if KEYWORDS.contains(&w) => TokenKind::Keyword,
        w if KNOWN_IDENTS.contains(&w) => TokenKind::KnownIdent,
        _ => TokenKind::Ident,
    }
}

fn classify_operator(op: &str) -> TokenKind {
    match op {
        "(" | ")" => TokenKind::Paren,
        "[" | "]" => TokenKind::Bracket,
        "{" | "}" => TokenKind::Brace,
        ";" => TokenKind::Semi,
        "," | ":" => TokenKind::Separator,
        "?" | "++" | "--" | "~" => TokenKind::Unary,
        _ => TokenKind::Operator,
    }
}

/// One token, or `None` for whitespace and comments.
fn lex_one(input: &str) -> IResult<&str, Option<TokenKind>> {
    alt((
        value(None, multispace1),
        value(None, line_comment),
        value(None, block_comment),
        value(Some(TokenKind::Str), string_literal),
        value(Some(TokenKind::Number), number),
        map(word, |w| Some(classify_word(w))),
        map(operator, |op| Some(classify_operator(op))),
    ))(input)
}

pub fn tokens(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while !rest.is_empty() {
        let start = source.len() - rest.len();
        match lex_one(rest) {
            Ok((rem, kind)) => {
                if let Some(kind) = kind {
                    tokens.push(Token { kind, span: start..source.len() - rem.len() });
                }
                rest = rem;
            }
            Err(_) => {
                let skip = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[skip..];
            }
        }
    }

    tokens
}

pub fn spans(source: &str) -> Vec<ColoredSpan> {
    tokens(source)
        .into_iter()
        .map(|token| ColoredSpan {
            color: FbColor { fg: Some(token.kind.color()), bg: None },
            span: token.span,
        })
        .collect()
}

/// Renders the spans of `source` as a span stream, one `start end #rrggbb`
/// line per token.
pub fn stream(source: &str) -> String {
    tokens(source)
        .iter()
        .map(|t| format!("{} {} {}", t.span.start, t.span.end, t.kind.color()))
        .collect::<Vec<_>>()
        .join("\n")
}
