use crate::chip::chip8::opcodes::{Instruction, Opcode};

/// Class 0. Only the display clear and the subroutine return have a
/// mnemonic; machine code routines (0NNN) are reported as unsupported.
pub(super) fn decode_sys(opcode: Opcode) -> Instruction {
    match opcode.word() {
        0x00E0 => Instruction::ClearDisplay,
        0x00EE => Instruction::Return,
        _ => Instruction::Unsupported(opcode.address()),
    }
}
