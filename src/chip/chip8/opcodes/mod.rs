mod arithmetic_and_logic;
mod program_flow;
mod system;

#[cfg(test)]
mod tests;

use std::fmt;

use ux::{u12, u4};

use crate::chip::chip8::opcodes::{
    arithmetic_and_logic::{decode_ldu, decode_reg},
    program_flow::decode_sk,
    system::decode_sys,
};

/// Represents a Chip 8 opcode. A Chip 8 opcode is two bytes long and
/// stored big-endian. All fields are derived from the raw word on access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    word: u16,
}

impl Opcode {
    /// Constructs a new `Opcode` given its byte representation.
    pub fn new(opcode: &[u8; 2]) -> Opcode {
        Opcode {
            word: u16::from_be_bytes(*opcode),
        }
    }

    /// The raw instruction word.
    pub fn word(&self) -> u16 {
        self.word
    }

    /// The instruction class is the most significant nibble of the opcode.
    pub fn instruction_class(&self) -> u4 {
        u4::new((self.word >> 12) as u8)
    }

    /// Interprets the second nibble as a register address.
    pub fn x(&self) -> Register {
        Register::new(u4::new(((self.word >> 8) & 0xF) as u8))
    }

    /// Interprets the third nibble as a register address.
    pub fn y(&self) -> Register {
        Register::new(u4::new(((self.word >> 4) & 0xF) as u8))
    }

    /// The least significant nibble.
    pub fn n(&self) -> u4 {
        u4::new((self.word & 0xF) as u8)
    }

    /// The least significant byte, in range 0x00 - 0xFF (inclusive).
    pub fn value(&self) -> u8 {
        (self.word & 0xFF) as u8
    }

    /// Interprets the three least significant nibbles as an address in the
    /// range 0x000 to 0xFFF (inclusive).
    pub fn address(&self) -> u12 {
        u12::new(self.word & 0x0FFF)
    }

    /// Decodes the opcode. See [`decode`].
    pub fn decode(self) -> Instruction {
        decode(self.word)
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Opcode {
        Opcode { word }
    }
}

/// One of the 16 general purpose registers `V0` to `VF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Register(u4);

impl Register {
    pub fn new(index: u4) -> Self {
        Register(index)
    }

    pub fn index(&self) -> u8 {
        u8::from(self.0)
    }
}

impl From<u4> for Register {
    fn from(index: u4) -> Self {
        Register::new(index)
    }
}

/// A decoded Chip 8 instruction. Each variant carries only the operands
/// the instruction family uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    ClearDisplay,
    /// 00EE
    Return,
    /// 1NNN
    Jump(u12),
    /// 2NNN
    Call(u12),
    /// 3XNN and 5XNN. The latter shares this form with class 3 rather
    /// than comparing two registers.
    SkipIfEqual(Register, u8),
    /// 4XNN
    SkipIfNotEqual(Register, u8),
    /// 6XNN
    Load(Register, u8),
    /// 7XNN
    AddValue(Register, u8),
    /// 8XY0
    Move(Register, Register),
    /// 8XY1
    Or(Register, Register),
    /// 8XY2
    And(Register, Register),
    /// 8XY3
    Xor(Register, Register),
    /// 8XY4
    AddRegister(Register, Register),
    /// 8XY5
    Sub(Register, Register),
    /// 8XY6
    Shift(Register),
    /// 9XY0
    SkipIfRegistersNotEqual(Register, Register),
    /// ANNN
    LoadIndex(u12),
    /// BNNN
    JumpWithOffset(u12),
    /// CXNN, printed with the full 12 bit payload.
    Random(Register, u12),
    /// DXYN
    Draw(Register, Register, u4),
    /// EXA1
    SkipIfKeyPressed(Register),
    /// EX07
    SkipIfKeyNotPressed(Register),
    /// FX07
    ReadDelayTimer(Register),
    /// FX0A
    AwaitKey(Register),
    /// FX15
    SetDelayTimer(Register),
    /// FX18
    SetSoundTimer(Register),
    /// FX1E
    AddToIndex(Register),
    /// FX29
    LoadSprite(Register),
    /// FX33
    StoreBcd(Register),
    /// FX55
    StoreRegisters(Register),
    /// FX65
    LoadRegisters(Register),
    /// Any word without a mnemonic. Keeps the low 12 bits for display.
    Unsupported(u12),
}

impl Instruction {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Instruction::Unsupported(_))
    }
}

/// Decodes a single instruction word. Every word maps to exactly one
/// `Instruction`; words without a mnemonic yield `Instruction::Unsupported`.
pub fn decode(word: u16) -> Instruction {
    let opcode = Opcode::from(word);
    match u8::from(opcode.instruction_class()) {
        0x0 => decode_sys(opcode),
        0x1 => Instruction::Jump(opcode.address()),
        0x2 => Instruction::Call(opcode.address()),
        0x3 | 0x5 => Instruction::SkipIfEqual(opcode.x(), opcode.value()),
        0x4 => Instruction::SkipIfNotEqual(opcode.x(), opcode.value()),
        0x6 => Instruction::Load(opcode.x(), opcode.value()),
        0x7 => Instruction::AddValue(opcode.x(), opcode.value()),
        0x8 => decode_reg(opcode),
        0x9 => Instruction::SkipIfRegistersNotEqual(opcode.x(), opcode.y()),
        0xA => Instruction::LoadIndex(opcode.address()),
        0xB => Instruction::JumpWithOffset(opcode.address()),
        0xC => Instruction::Random(opcode.x(), opcode.address()),
        0xD => Instruction::Draw(opcode.x(), opcode.y(), opcode.n()),
        0xE => decode_sk(opcode),
        0xF => decode_ldu(opcode),
        // a u4 never exceeds 0xF
        _ => Instruction::Unsupported(opcode.address()),
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "V{:X}", self.index())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04x}", self.word)
    }
}

/// Renders the instruction in the mnemonic form used by the listing.
/// Addresses and immediates are printed in decimal.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;

        match *self {
            ClearDisplay => write!(f, "dcl"),
            Return => write!(f, "ret"),
            Jump(address) => write!(f, "jmp {}", u16::from(address)),
            Call(address) => write!(f, "cll {}", u16::from(address)),
            SkipIfEqual(reg, value) => write!(f, "je  {} {}", reg, value),
            SkipIfNotEqual(reg, value) => write!(f, "jne {} {}", reg, value),
            Load(reg, value) => write!(f, "mov {} {}", reg, value),
            AddValue(reg, value) => write!(f, "add {} {}", reg, value),
            Move(x, y) => write!(f, "mov {} {}", x, y),
            Or(x, y) => write!(f, "or {} {}", x, y),
            And(x, y) => write!(f, "and {} {}", x, y),
            Xor(x, y) => write!(f, "xor {} {}", x, y),
            AddRegister(x, y) => write!(f, "add {} {}", x, y),
            Sub(x, y) => write!(f, "sub {} {}", x, y),
            Shift(reg) => write!(f, "sft {}", reg),
            SkipIfRegistersNotEqual(x, y) => write!(f, "jne {} {}", x, y),
            LoadIndex(address) => write!(f, "mov I {}", u16::from(address)),
            JumpWithOffset(address) => write!(f, "jwo {}", u16::from(address)),
            Random(reg, mask) => write!(f, "rnd {} {}", reg, u16::from(mask)),
            Draw(x, y, n) => write!(f, "dsp {} {} {}", x, y, u8::from(n)),
            SkipIfKeyPressed(reg) => write!(f, "je  KEY {}", reg),
            SkipIfKeyNotPressed(reg) => write!(f, "jne KEY {}", reg),
            ReadDelayTimer(reg) => write!(f, "mov {} TIMER", reg),
            AwaitKey(reg) => write!(f, "awk {}", reg),
            SetDelayTimer(reg) => write!(f, "mov TIMER {}", reg),
            SetSoundTimer(reg) => write!(f, "mov SOUND {}", reg),
            AddToIndex(reg) => write!(f, "add I {}", reg),
            LoadSprite(reg) => write!(f, "msp {}", reg),
            StoreBcd(reg) => write!(f, "bcd {}", reg),
            StoreRegisters(reg) => write!(f, "pat {}", reg),
            LoadRegisters(reg) => write!(f, "lat {}", reg),
            Unsupported(payload) => write!(f, "unsuported {}", u16::from(payload)),
        }
    }
}
