use crate::chip::chip8::opcodes::{Instruction, Opcode};

/// Class E, selected by the low byte. Note that A1 is read as "skip if
/// pressed" and 07 as "skip if not pressed".
pub(super) fn decode_sk(opcode: Opcode) -> Instruction {
    match opcode.value() {
        0xA1 => Instruction::SkipIfKeyPressed(opcode.x()),
        0x07 => Instruction::SkipIfKeyNotPressed(opcode.x()),
        _ => Instruction::Unsupported(opcode.address()),
    }
}
