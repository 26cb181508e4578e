pub mod counter;
pub mod highlight;
pub mod lex;
pub mod sample;
pub mod site;
pub mod span_stream;
