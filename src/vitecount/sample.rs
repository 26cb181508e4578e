//! The starter component's own source, used to seed the source view.

use crate::lex;

pub const SOURCE: &str = include_str!("sample/App.tsx");

pub fn stream() -> String {
    lex::stream(SOURCE)
}
