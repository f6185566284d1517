pub use chip8::Chip8;
pub use config::Config;
pub use error::{ConfigError, CycleError, LoadError};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use quirks::QuirkSet;
pub use scheduler::{Command, ExecutionState, Pass, Scheduler};
pub use state::{FrameBuffer, State};

mod chip8;
mod config;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
mod quirks;
mod scheduler;
pub mod state;
