use std::io::Read;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::Config;
use crate::constants::{MAX_ROM_SIZE, PROGRAM_START, STACK_DEPTH};
use crate::error::{CycleError, LoadError};
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::quirks::QuirkSet;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `quirks` selecting how ambiguous instructions behave
///  - the `rng` feeding the random instruction
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU by a single instruction
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display, and everything else for
///   debugging
pub struct Chip8 {
    state: State,
    quirks: QuirkSet,
    rng: Box<dyn RngCore>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_quirks(QuirkSet::default())
    }

    pub fn with_quirks(quirks: QuirkSet) -> Self {
        Chip8 {
            state: State::new(),
            quirks,
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_quirks(config.quirks)
    }

    /// Replaces the source of random bytes, e.g. with a seeded generator for reproducible runs
    pub fn with_rng<R: RngCore + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Load a rom from a source
    ///
    /// The whole source is read before memory is touched, so a failed read leaves the VM as
    /// it was. Bytes that don't fit in memory are dropped.
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize, LoadError> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        Ok(self.load_bytes(&rom))
    }

    /// Copies a ROM into memory at the reset vector, returning the number of bytes loaded
    pub fn load_bytes(&mut self, rom: &[u8]) -> usize {
        let len = rom.len().min(MAX_ROM_SIZE);
        if len < rom.len() {
            debug!("ROM is {} bytes, only loading the first {}", rom.len(), len);
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + len].copy_from_slice(&rom[..len]);
        debug!("loaded {} byte ROM at {:03X}", len, PROGRAM_START);
        len
    }

    /// Replace the set of held keys; bit k is set while key k is held
    pub fn set_keypad(&mut self, keypad: u16) {
        self.state.keypad = keypad;
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.keypad |= 1 << (key & 0xF);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.state.keypad &= !(1 << (key & 0xF));
    }

    /// Advances the CPU by a single cycle
    /// - gets the opcode at the pc and moves the pc past it
    /// - decodes and executes it
    ///
    /// Errors are logged and returned but never leave the VM in a state it can't continue
    /// from; the offending instruction simply does nothing.
    pub fn cycle(&mut self) -> Result<(), CycleError> {
        let pc = self.state.pc;
        let op = Opcode(self.state.word(pc));
        self.state.advance_pc();

        let instruction = Instruction::decode(op);
        trace!("{:03X} {:04X} {}", pc, op.0, instruction);

        let result = self.execute(instruction, pc);
        if let Err(error) = &result {
            warn!("{}", error);
        }
        result
    }

    fn execute(&mut self, instruction: Instruction, pc: u16) -> Result<(), CycleError> {
        use Instruction::*;

        let state = &mut self.state;
        let quirks = &self.quirks;
        match instruction {
            Cls => clr(state),
            Ret => rts(state)?,
            Jp { addr } => jump(state, addr),
            Call { addr } => call(state, addr)?,
            SeByte { x, kk } => ske(state, x, kk),
            SneByte { x, kk } => skne(state, x, kk),
            SeReg { x, y } => skre(state, x, y),
            LdByte { x, kk } => load(state, x, kk),
            AddByte { x, kk } => add(state, x, kk),
            LdReg { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y, quirks),
            And { x, y } => and(state, x, y, quirks),
            Xor { x, y } => xor(state, x, y, quirks),
            AddReg { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            Shr { x, y } => shr(state, x, y, quirks),
            Subn { x, y } => subn(state, x, y),
            Shl { x, y } => shl(state, x, y, quirks),
            SneReg { x, y } => skrne(state, x, y),
            LdI { addr } => loadi(state, addr),
            JpOffset { x, addr } => jumpi(state, x, addr, quirks),
            Rnd { x, kk } => rand(state, x, kk, self.rng.as_mut()),
            Drw { x, y, n } => draw(state, x, y, n, quirks),
            Skp { x } => skpr(state, x),
            Sknp { x } => skup(state, x),
            LdFromDelay { x } => moved(state, x),
            LdKey { x } => keyd(state, x),
            LdDelay { x } => loads(state, x),
            LdSound { x } => ld(state, x),
            AddI { x } => addi(state, x),
            LdFont { x } => ldspr(state, x),
            Bcd { x } => bcd(state, x),
            Store { x } => stor(state, x, quirks),
            Load { x } => read(state, x, quirks),
            Undefined(op) => return Err(CycleError::UndefinedOpcode { op, pc }),
        }
        Ok(())
    }

    /// Handles a 60Hz timer pulse
    /// - decrements the delay and sound timers, stopping at 0
    /// - opens the next frame for drawing
    pub fn tick(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
        self.state.draw_ready = true;
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn quirks(&self) -> &QuirkSet {
        &self.quirks
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn i(&self) -> u16 {
        self.state.i
    }

    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    pub fn stack(&self) -> &[u16; STACK_DEPTH] {
        &self.state.stack
    }

    pub fn memory(&self) -> &[u8] {
        &self.state.memory
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn keypad(&self) -> u16 {
        self.state.keypad
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
