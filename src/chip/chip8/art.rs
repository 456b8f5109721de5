use crate::chip::chip8::constants::{CHIP8_PIXEL_OFF, CHIP8_PIXEL_ON};

fn bits_to_art(value: u16, width: u32) -> String {
    (0..width)
        .rev()
        .map(|bit| {
            if (value >> bit) & 1 == 1 {
                CHIP8_PIXEL_ON
            } else {
                CHIP8_PIXEL_OFF
            }
        })
        .collect()
}

/// Renders a byte as 8 cells, most significant bit first.
pub fn byte_art(byte: u8) -> String {
    bits_to_art(byte as u16, 8)
}

/// Renders a word as 16 cells, most significant bit first.
pub fn word_art(word: u16) -> String {
    bits_to_art(word, 16)
}

/// Renders a word the way the interpreter would draw it as sprite data:
/// the high byte on the first row and the low byte on the second.
pub fn sprite_rows(word: u16) -> [String; 2] {
    let [high, low] = word.to_be_bytes();
    [byte_art(high), byte_art(low)]
}
