/// Bitmap rendering of instruction words.
pub mod art;
/// CHIP-8 constants.
pub mod constants;
/// Cursive display output.
pub mod cursive_display;
/// Listing driver writing decoded programs to an output sink.
pub mod listing;
/// Decoding of opcodes and their textual form.
pub mod opcodes;


use std::fs;
use std::fs::File;
use std::io::Read;

use log::info;

use crate::chip::{
    chip8::constants::CHIP8_MAX_PROGRAM_SIZE,
    chip8::opcodes::{Instruction, Opcode},
    Chip, LoadProgramError,
};

pub use crate::chip::chip8::opcodes::{decode, Register};

/// Represents a loaded CHIP-8 program and the position of the cursor
/// the text UI walks through it with.
pub struct Chip8 {
    /// The program image as read from disk. The first byte is loaded at
    /// `CHIP8_PROGRAM_START`.
    program: Vec<u8>,

    /// Index of the currently selected word.
    cursor: usize,

    /// A flag that indicates whether the cursor or the program changed
    /// since it was last set to false.
    draw: bool,
}

impl Chip for Chip8 {
    /// Addresses fit into 12 bits. We use a u16 and rely on the program
    /// size check to keep them in range.
    type MemoryAddress = u16;

    type Instruction = Instruction;

    fn load_program(&mut self, path: &str) -> Result<usize, LoadProgramError> {
        let mut file =
            File::open(path).map_err(|_| LoadProgramError::CouldNotOpenFile(path.to_string()))?;
        let md = fs::metadata(path)
            .map_err(|_| LoadProgramError::CouldNotReadMetadata(path.to_string()))?;

        if md.len() > CHIP8_MAX_PROGRAM_SIZE as u64 {
            return Err(LoadProgramError::ProgramTooLarge(md.len() as usize));
        }

        let mut buffer = vec![0; md.len() as usize];
        file.read_exact(&mut buffer)
            .map_err(|_| LoadProgramError::CouldNotReadFile(path.to_string()))?;

        self.load_program_bytes(&buffer);
        info!("Loaded {} bytes from {}", buffer.len(), path);

        Ok(buffer.len())
    }

    fn disassemble(&self) -> Vec<(u16, Instruction)> {
        self.words()
            .map(|(address, opcode)| (address, opcode.decode()))
            .collect()
    }

    fn cycle(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
        self.draw = true;
    }

    fn rewind(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + len - 1) % len;
        self.draw = true;
    }
}

impl Chip8 {
    /// Constructs an empty CHIP-8 program with the cursor on the first word.
    pub fn new() -> Self {
        Chip8 {
            program: Vec::new(),
            cursor: 0,
            draw: true,
        }
    }

    /// Convenience method to load a program from a slice. Resets the cursor.
    ///
    /// # Panics
    /// In case `program` is too long to fit into memory.
    pub fn load_program_bytes(&mut self, program: &[u8]) {
        assert!(program.len() <= CHIP8_MAX_PROGRAM_SIZE as usize);
        self.program = program.to_vec();
        self.cursor = 0;
        self.draw = true;
    }

    /// The raw program image.
    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Number of complete words in the program.
    pub fn len(&self) -> usize {
        self.program.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the program's words and their addresses.
    pub fn words(&self) -> impl Iterator<Item = (u16, Opcode)> + '_ {
        listing::words(&self.program)
    }

    /// The word under the cursor, if the program holds any.
    pub fn current(&self) -> Option<(u16, Opcode)> {
        self.words().nth(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Chip8::new()
    }
}
