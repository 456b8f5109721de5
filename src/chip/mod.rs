pub mod chip8;

use std::fmt;

use cursive::CbSink;

/// A chip whose program image can be loaded and walked instruction by
/// instruction.
pub trait Chip {
    /// The type used to address the chip's memory.
    type MemoryAddress;

    /// The decoded form of a single instruction word.
    type Instruction: fmt::Display;

    /// Loads the program stored at `path`. Returns the number of bytes read.
    fn load_program(&mut self, path: &str) -> Result<usize, LoadProgramError>;

    /// Decodes the whole program, pairing every instruction with its address.
    fn disassemble(&self) -> Vec<(Self::MemoryAddress, Self::Instruction)>;

    /// Moves the cursor to the next instruction, wrapping around at the end.
    fn cycle(&mut self);

    /// Moves the cursor to the previous instruction, wrapping around at the start.
    fn rewind(&mut self);
}

/// A chip that can present its state as a cursive view.
pub trait ChipWithCursiveDisplay {
    /// Sends a refreshed view to the UI thread if anything changed since
    /// the last call.
    fn update_ui(&mut self, gfx_sink: &CbSink);
}

/// Errors that occur while loading a program from disk.
#[derive(Debug)]
pub enum LoadProgramError {
    CouldNotOpenFile(String),
    CouldNotReadMetadata(String),
    CouldNotReadFile(String),
    ProgramTooLarge(usize),
}

impl fmt::Display for LoadProgramError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadProgramError::CouldNotOpenFile(path) => write!(f, "Could not open {}", path),
            LoadProgramError::CouldNotReadMetadata(path) => {
                write!(f, "Could not read metadata of {}", path)
            }
            LoadProgramError::CouldNotReadFile(path) => write!(f, "Could not read {}", path),
            LoadProgramError::ProgramTooLarge(size) => {
                write!(f, "Program of {} bytes does not fit into memory", size)
            }
        }
    }
}

impl std::error::Error for LoadProgramError {}
