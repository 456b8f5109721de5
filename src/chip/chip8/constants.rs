/// Address at which CHIP-8 programs are loaded. The listing numbers
/// words starting from here.
pub const CHIP8_PROGRAM_START: u16 = 0x200; // 512

/// The largest program that fits between `CHIP8_PROGRAM_START` and the end
/// of the 4096 byte address space.
pub const CHIP8_MAX_PROGRAM_SIZE: u16 = 0x1000 - CHIP8_PROGRAM_START;

/// Glyph for a set bit in the bitmap rendering.
pub const CHIP8_PIXEL_ON: char = '█';

/// Glyph for a cleared bit in the bitmap rendering.
pub const CHIP8_PIXEL_OFF: char = ' ';

/// Number of listing lines the text UI shows around the cursor.
pub const CHIP8_VIEW_LINES: usize = 16;
