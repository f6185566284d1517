use serde::Deserialize;

/// # Quirks
/// Interpreters of the instruction set have historically disagreed on the behavior of a
/// handful of instructions. Each switch selects one of those behaviors and is fixed when
/// the VM is constructed.
///
/// - `vf_reset` OR/AND/XOR (8XY1..8XY3) reset VF to 0
/// - `memory` bulk store/load (FX55/FX65) leaves I pointing past the last register
/// - `disp_wait` DRW (DXYN) waits for the next 60Hz frame before drawing again
/// - `clip` sprites are clipped at the screen edges instead of wrapping around
/// - `shift` shifts (8XY6/8XYE) operate on Vx in place instead of copying from Vy
/// - `jump` the jump with offset (BNNN) adds Vx instead of V0
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuirkSet {
    pub vf_reset: bool,
    pub memory: bool,
    pub disp_wait: bool,
    pub clip: bool,
    pub shift: bool,
    pub jump: bool,
}

impl QuirkSet {
    /// The COSMAC VIP behavior, except that shifts operate in place
    pub fn classic() -> Self {
        QuirkSet {
            vf_reset: true,
            memory: true,
            disp_wait: true,
            clip: true,
            shift: true,
            jump: false,
        }
    }

    /// The behavior most later interpreters settled on
    pub fn modern() -> Self {
        QuirkSet {
            vf_reset: false,
            memory: false,
            disp_wait: false,
            clip: true,
            shift: true,
            jump: true,
        }
    }
}

impl Default for QuirkSet {
    fn default() -> Self {
        Self::classic()
    }
}
