use thiserror::Error;

/// Failure to get a ROM into memory. Always raised before any cycle runs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),
}

/// A condition raised by a single cycle.
///
/// None of these are fatal: the instruction that raised it behaves as a no-op (the program
/// counter has already moved past it) and execution carries on with the next one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("undefined opcode {op:04X} at {pc:03X}")]
    UndefinedOpcode { op: u16, pc: u16 },

    #[error("stack overflow calling from {pc:03X}")]
    StackOverflow { pc: u16 },

    #[error("stack underflow returning from {pc:03X}")]
    StackUnderflow { pc: u16 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cycle rate must be a positive number of hertz, got {0}")]
    CycleRate(f64),
}
