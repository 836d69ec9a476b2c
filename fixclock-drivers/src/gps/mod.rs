//! GPS decoder implementations

pub mod decoder;

pub use decoder::{NmeaDecoder, MAX_SENTENCE_LEN};
