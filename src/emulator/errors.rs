use std::io;
use std::path::PathBuf;

/// Errors raised while loading a program image. A failed load leaves the
/// machine non-resumable; callers must not `step` it afterwards.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read program {}: {}", .path.display(), .source)]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("program is {size} bytes, at most {max_size} fit above the entry point")]
    TooLarge { size: usize, max_size: usize },
}

/// Faults raised during instruction execution. A fault halts the machine;
/// the driver decides what to do with it. `pc` is the address of the
/// faulting instruction.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum Fault {
    #[error("call stack overflow at {pc:#06X}")]
    StackOverflow { pc: u16 },

    #[error("call stack underflow at {pc:#06X}")]
    StackUnderflow { pc: u16 },
}
