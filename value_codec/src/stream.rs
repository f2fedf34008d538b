//! The object-stream abstraction consumed by generated codecs.
//!
//! Both halves are backed by `serde_json` trees rather than a hand-rolled
//! tokenizer: the writer assembles a `serde_json::Value` (with insertion
//! order preserved, so encode output is observably ordinal-ordered) and the
//! reader walks a parsed tree as a token cursor. Malformed input therefore
//! fails at construction, and a truncated nesting fails at the first
//! out-of-place operation; nothing can hang.

mod reader;
#[cfg(test)]
mod tests;
mod writer;

pub use reader::JsonReader;
pub use writer::JsonWriter;
