pub mod counter_card;
pub mod highlight_output;
pub mod source_input;
pub mod stream_input;
