/// Width of the frame buffer in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Height of the frame buffer in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Size of the addressable memory in bytes.
/// The last addressable byte is 0xFFE; accesses past it wrap around.
pub const MEMORY_SIZE: usize = 0xFFF;

/// The reset vector; ROMs are loaded here and execution starts here
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// The program counter wraps modulo this value rather than at the end of memory
pub const PC_WRAP: u16 = 0x0FFE;

/// Number of return addresses the stack can hold
pub const STACK_DEPTH: usize = 16;

/// Frequency in Hz at which the delay and sound timers count down
pub const TIMER_HZ: f64 = 60.0;

/// Default frequency in Hz at which instructions are executed
pub const DEFAULT_CYCLE_HZ: f64 = 700.0;

/// The font vector; glyphs for 0..F are installed here at initialization
pub const FONT_START: u16 = 0x050;

/// Each glyph is 5 rows of 8 pixels, of which only the high nibble is used
pub const GLYPH_SIZE: u16 = 5;

/// # Font
/// Glyphs for the hexadecimal digits 0..F.
///
/// Every glyph is 4 pixels wide and 5 pixels tall, e.g. the glyph for `0`:
/// ```text
/// 0xF0  ****....
/// 0x90  *..*....
/// 0x90  *..*....
/// 0x90  *..*....
/// 0xF0  ****....
/// ```
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
