//! Text preparation shared by every field extractor.

pub mod normalize;
pub mod numerals;

pub use normalize::{clean, sentences, strip_punctuation};
pub use numerals::{parse_money, parse_period};
