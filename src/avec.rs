//! Convenience interfaces for common reading patterns.
//!
//! [`card::CardReader`] drives a complete read from a hardware capture, while
//! the decode functions in this module handle bits captured ahead of time.

pub mod card;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

pub use card::{CardReader, Presence};
#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

/// Strip the start sentinel, end sentinel, and LRC character from a decoded
/// track, leaving its data.
///
/// ```
/// assert_eq!(payload(b";1234?0"), b"1234");
/// ```
pub fn payload(text: &[u8]) -> &[u8] {
    text.get(1..text.len().saturating_sub(2)).unwrap_or_default()
}
