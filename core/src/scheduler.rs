use std::time::Instant;

use log::debug;

use crate::chip8::Chip8;
use crate::config::Config;
use crate::constants::{DEFAULT_CYCLE_HZ, TIMER_HZ};
use crate::error::CycleError;

/// What the scheduler is doing with the VM
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecutionState {
    /// Nothing advances; the display is still refreshed
    Halted,
    /// Instructions run at the configured cycle rate
    Running,
    /// Instructions run one at a time on `Command::Advance`; timers keep counting
    Stepping,
}

/// Discrete events delivered by whoever drives the scheduler, e.g. a frontend's key bindings
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Halt,
    Run,
    Step,
    /// Execute one instruction while stepping
    Advance,
}

/// What happened during a single scheduler pass
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pass {
    /// An instruction was executed
    pub cycled: bool,
    /// The 60Hz clock fired; the display should be redrawn
    pub render: bool,
    /// The executed instruction raised a (non-fatal) error
    pub error: Option<CycleError>,
}

/// # Scheduler
/// Drives a VM at two rates derived from one wall-clock reference:
/// - the cycle clock executes instructions at `cycle_hz`
/// - the timer clock decrements the timers and requests a redraw at 60Hz
///
/// Each clock is allowed at most one unit of work per pass, so a clock that falls behind
/// catches up over subsequent passes instead of bursting. The configured rates are therefore
/// upper bounds that are only met when passes happen faster than both of them.
pub struct Scheduler {
    cycle_hz: f64,
    clock_hz: f64,
    state: ExecutionState,
    start: Instant,
    cycles_issued: u64,
    clocks_issued: u64,
}

impl Scheduler {
    pub fn new(cycle_hz: f64) -> Self {
        Scheduler {
            cycle_hz,
            clock_hz: TIMER_HZ,
            state: ExecutionState::Halted,
            start: Instant::now(),
            cycles_issued: 0,
            clocks_issued: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cycle_hz)
    }

    /// Runs one pass against the current time
    ///
    /// # Arguments
    /// * `chip8` the VM to drive
    /// * `keypad` the keys held right now; bit k is set while key k is held
    /// * `commands` events observed since the last pass
    pub fn pass(&mut self, chip8: &mut Chip8, keypad: u16, commands: &[Command]) -> Pass {
        self.pass_at(chip8, keypad, commands, Instant::now())
    }

    /// Runs one pass as though the current time were `now`
    pub fn pass_at(
        &mut self,
        chip8: &mut Chip8,
        keypad: u16,
        commands: &[Command],
        now: Instant,
    ) -> Pass {
        chip8.set_keypad(keypad);

        let mut target = self.state;
        let mut advance = false;
        for command in commands {
            match command {
                Command::Halt => target = ExecutionState::Halted,
                Command::Run => target = ExecutionState::Running,
                Command::Step => target = ExecutionState::Stepping,
                Command::Advance => advance = true,
            }
        }
        if target != self.state {
            debug!("{:?} -> {:?}", self.state, target);
            self.state = target;
            self.restart(now);
        }

        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        let mut pass = Pass::default();

        let cycle_due = match self.state {
            ExecutionState::Running => self.cycles_issued as f64 <= elapsed * self.cycle_hz,
            ExecutionState::Stepping => advance,
            ExecutionState::Halted => false,
        };
        if cycle_due {
            pass.cycled = true;
            pass.error = chip8.cycle().err();
            self.cycles_issued += 1;
        }

        if self.clocks_issued as f64 <= elapsed * self.clock_hz {
            if self.state != ExecutionState::Halted {
                chip8.tick();
            }
            pass.render = true;
            self.clocks_issued += 1;
        }

        pass
    }

    /// Forgets all issued work so a resumed VM doesn't try to catch up on time spent paused
    fn restart(&mut self, now: Instant) {
        self.start = now;
        self.cycles_issued = 0;
        self.clocks_issued = 0;
    }

    pub fn state(&self) -> ExecutionState {
        self.state
    }

    pub fn cycles_issued(&self) -> u64 {
        self.cycles_issued
    }

    pub fn clocks_issued(&self) -> u64 {
        self.clocks_issued
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_HZ)
    }
}
