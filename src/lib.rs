pub mod normalizer;
pub mod quotes;
pub mod text;

pub use text::ascii_quotes;
