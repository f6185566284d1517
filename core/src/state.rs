use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT, FONT_START, MEMORY_SIZE, PC_WRAP, PROGRAM_START,
    STACK_DEPTH,
};

/// The FrameBuffer is indexed as [y][x]; every cell is either 0 or 1
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// A snapshot of the VM's internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) receives the carry/borrow/collision flag of any instruction that
///       produces one, overwriting whatever it held
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, wrapping modulo `PC_WRAP`
///
/// Pointer
/// - (sp) the number of return addresses currently on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound) counting down to 0 at 60Hz
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 0xFFF bytes of addressable memory
///     - 0x000..0x200 is reserved; the font lives at `FONT_START`
///     - ROMs are loaded at `PROGRAM_START`
/// - 64x32 frame buffer
///
/// ## Input
/// - a 16-bit mask of held keys; bit k is set while key k is held
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_DEPTH],
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub keypad: u16,
    /// Whether a sprite may still be drawn during the current frame
    pub draw_ready: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font_start = FONT_START as usize;
        memory[font_start..font_start + FONT.len()].copy_from_slice(&FONT);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_DEPTH],
            delay_timer: 0,
            sound_timer: 0,
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            keypad: 0,
            draw_ready: true,
        }
    }

    /// Reads a byte, wrapping addresses past the end of memory
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize % MEMORY_SIZE]
    }

    /// Writes a byte, wrapping addresses past the end of memory
    pub fn write(&mut self, addr: u16, byte: u8) {
        self.memory[addr as usize % MEMORY_SIZE] = byte;
    }

    /// Gets the big-endian instruction word at `addr`
    pub fn word(&self, addr: u16) -> u16 {
        u16::from(self.read(addr)) << 8 | u16::from(self.read(addr.wrapping_add(1)))
    }

    /// Moves the program counter past one instruction
    pub fn advance_pc(&mut self) {
        self.pc = (self.pc + 0x2) % PC_WRAP;
    }

    /// Address of the instruction that was just fetched
    pub fn previous_pc(&self) -> u16 {
        (self.pc + PC_WRAP - 0x2) % PC_WRAP
    }

    /// Moves the program counter back onto the instruction that was just fetched
    pub fn rewind_pc(&mut self) {
        self.pc = self.previous_pc();
    }

    pub fn key_held(&self, key: u8) -> bool {
        key < 16 && self.keypad & (1 << key) != 0
    }

    /// The lowest numbered key currently held, if any
    pub fn first_held_key(&self) -> Option<u8> {
        (0..16).find(|&key| self.key_held(key))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
