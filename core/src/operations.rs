use rand::{Rng, RngCore};

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START, GLYPH_SIZE, STACK_DEPTH};
use crate::error::CycleError;
use crate::quirks::QuirkSet;
use crate::state::State;

// Every operation runs after the program counter has been moved past its own opcode, so
// a skip is a single further advance and a jump simply overwrites it.

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<(), CycleError> {
    if state.sp == 0 {
        return Err(CycleError::StackUnderflow {
            pc: state.previous_pc(),
        });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize];
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<(), CycleError> {
    if state.sp as usize >= STACK_DEPTH {
        return Err(CycleError::StackOverflow {
            pc: state.previous_pc(),
        });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    if state.v[x as usize] == kk {
        state.advance_pc();
    }
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    if state.v[x as usize] != kk {
        state.advance_pc();
    }
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    if state.v[x as usize] == state.v[y as usize] {
        state.advance_pc();
    }
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    if state.v[x as usize] != state.v[y as usize] {
        state.advance_pc();
    }
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = kk;
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] = state.v[y as usize];
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = state.v[x as usize].wrapping_add(kk);
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8, quirks: &QuirkSet) {
    state.v[x as usize] |= state.v[y as usize];
    reset_flag(state, quirks);
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8, quirks: &QuirkSet) {
    state.v[x as usize] &= state.v[y as usize];
    reset_flag(state, quirks);
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8, quirks: &QuirkSet) {
    state.v[x as usize] ^= state.v[y as usize];
    reset_flag(state, quirks);
}

fn reset_flag(state: &mut State, quirks: &QuirkSet) {
    if quirks.vf_reset {
        state.v[0xF] = 0x0;
    }
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    state.v[x as usize] = res;
    state.v[0xF] = over as u8;
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
    state.v[x as usize] = res;
    state.v[0xF] = !under as u8;
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
    state.v[x as usize] = res;
    state.v[0xF] = !under as u8;
}

/// Vx = src >> 1; VF = lsb(src)
/// `src` is Vx with the shift quirk and Vy without
pub fn shr(state: &mut State, x: u8, y: u8, quirks: &QuirkSet) {
    let src = shift_source(state, x, y, quirks);
    state.v[x as usize] = src >> 1;
    state.v[0xF] = src & 0x1;
}

/// Vx = src << 1; VF = msb(src)
/// `src` is Vx with the shift quirk and Vy without
pub fn shl(state: &mut State, x: u8, y: u8, quirks: &QuirkSet) {
    let src = shift_source(state, x, y, quirks);
    state.v[x as usize] = src << 1;
    state.v[0xF] = src >> 7;
}

fn shift_source(state: &State, x: u8, y: u8, quirks: &QuirkSet) -> u8 {
    if quirks.shift {
        state.v[x as usize]
    } else {
        state.v[y as usize]
    }
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
}

/// PC = V0 + addr, or Vx + addr with the jump quirk
pub fn jumpi(state: &mut State, x: u8, addr: u16, quirks: &QuirkSet) {
    let offset = if quirks.jump {
        state.v[x as usize]
    } else {
        state.v[0x0]
    };
    state.pc = addr + u16::from(offset);
}

/// Vx = rand_byte & kk
pub fn rand(state: &mut State, x: u8, kk: u8, rng: &mut dyn RngCore) {
    let rand_byte: u8 = rng.gen();
    state.v[x as usize] = rand_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n onto the FrameBuffer at (Vx, Vy).
/// The origin always wraps onto the screen; pixels past the edges are clipped or wrapped
/// depending on the clip quirk.
/// Sets VF if any pixels were erased.
pub fn draw(state: &mut State, x: u8, y: u8, n: u8, quirks: &QuirkSet) {
    if quirks.disp_wait {
        if !state.draw_ready {
            state.rewind_pc();
            return;
        }
        state.draw_ready = false;
    }

    let origin_x = state.v[x as usize] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[y as usize] as usize % DISPLAY_HEIGHT;
    let mut collision = 0x0;

    for byte in 0..n as usize {
        let row = origin_y + byte;
        if quirks.clip && row >= DISPLAY_HEIGHT {
            break;
        }
        let row = row % DISPLAY_HEIGHT;
        let sprite = state.read(state.i.wrapping_add(byte as u16));

        for bit in 0..8 {
            let col = origin_x + bit;
            if quirks.clip && col >= DISPLAY_WIDTH {
                break;
            }
            let col = col % DISPLAY_WIDTH;
            let pixel = (sprite >> (7 - bit)) & 1;
            collision |= pixel & state.frame_buffer[row][col];
            state.frame_buffer[row][col] ^= pixel;
        }
    }

    state.v[0xF] = collision;
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8) {
    if state.key_held(state.v[x as usize]) {
        state.advance_pc();
    }
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8) {
    if !state.key_held(state.v[x as usize]) {
        state.advance_pc();
    }
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[x as usize] = state.delay_timer;
}

/// await keypress for Vx
/// Refetches this instruction until some key is held
pub fn keyd(state: &mut State, x: u8) {
    match state.first_held_key() {
        Some(key) => state.v[x as usize] = key,
        None => state.rewind_pc(),
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.delay_timer = state.v[x as usize];
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.sound_timer = state.v[x as usize];
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.i = state.i.wrapping_add(u16::from(state.v[x as usize]));
}

/// I = FONT_START + Vx * 5
/// Set I to the memory address of the glyph for the low nibble of Vx
pub fn ldspr(state: &mut State, x: u8) {
    state.i = FONT_START + u16::from(state.v[x as usize] & 0xF) * GLYPH_SIZE;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address I
pub fn bcd(state: &mut State, x: u8) {
    let value = state.v[x as usize];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, &digit) in digits.iter().enumerate() {
        state.write(state.i.wrapping_add(offset as u16), digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
/// With the memory quirk I is left pointing just past the last byte written
pub fn stor(state: &mut State, x: u8, quirks: &QuirkSet) {
    for reg in 0..=x {
        state.write(state.i.wrapping_add(u16::from(reg)), state.v[reg as usize]);
    }
    step_i(state, x, quirks);
}

/// V0..=Vx = mem[I..=I+x]
/// With the memory quirk I is left pointing just past the last byte read
pub fn read(state: &mut State, x: u8, quirks: &QuirkSet) {
    for reg in 0..=x {
        state.v[reg as usize] = state.read(state.i.wrapping_add(u16::from(reg)));
    }
    step_i(state, x, quirks);
}

fn step_i(state: &mut State, x: u8, quirks: &QuirkSet) {
    if quirks.memory {
        state.i = state.i.wrapping_add(u16::from(x) + 1);
    }
}
