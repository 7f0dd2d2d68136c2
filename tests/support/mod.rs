#![allow(dead_code)]

use magstripe::sans::track::Track;
use tinyvec::ArrayVec;

pub type Bits = ArrayVec<[bool; 1024]>;

/// Encode `text` as it would be read from a stripe, with ten blank bits on
/// either side and a trailing LRC character.
pub fn encode(track: Track, text: &str) -> Bits {
    let format = track.format();
    let data_bits = format.width - 1;

    let mut bits = Bits::new();
    let mut lrc = 0;

    let frame = |bits: &mut Bits, value: u8| {
        (0..data_bits).for_each(|i| bits.push((value >> i) & 1 != 0));
        bits.push(value.count_ones() % 2 == 0);
    };

    bits.extend([false; 10]);

    for c in text.bytes() {
        let value = c - format.ascii_offset;
        lrc ^= value;
        frame(&mut bits, value);
    }

    frame(&mut bits, lrc);
    bits.extend([false; 10]);

    bits
}

/// The same bits, as captured from a backward swipe.
pub fn reversed(bits: &[bool]) -> Bits {
    bits.iter().rev().copied().collect()
}
