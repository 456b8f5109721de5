use crate::chip::chip8::opcodes::{Instruction, Opcode};

/// Class 8, register to register operations selected by the last nibble.
pub(super) fn decode_reg(opcode: Opcode) -> Instruction {
    let (x, y) = (opcode.x(), opcode.y());
    match u8::from(opcode.n()) {
        0x0 => Instruction::Move(x, y),
        0x1 => Instruction::Or(x, y),
        0x2 => Instruction::And(x, y),
        0x3 => Instruction::Xor(x, y),
        0x4 => Instruction::AddRegister(x, y),
        0x5 => Instruction::Sub(x, y),
        0x6 => Instruction::Shift(x),
        _ => Instruction::Unsupported(opcode.address()),
    }
}

/// Class F, timer, input, index and memory operations selected by the
/// low byte. All of them take a single register operand.
pub(super) fn decode_ldu(opcode: Opcode) -> Instruction {
    let reg = opcode.x();
    match opcode.value() {
        0x07 => Instruction::ReadDelayTimer(reg),
        0x0A => Instruction::AwaitKey(reg),
        0x15 => Instruction::SetDelayTimer(reg),
        0x18 => Instruction::SetSoundTimer(reg),
        0x1E => Instruction::AddToIndex(reg),
        0x29 => Instruction::LoadSprite(reg),
        0x33 => Instruction::StoreBcd(reg),
        0x55 => Instruction::StoreRegisters(reg),
        0x65 => Instruction::LoadRegisters(reg),
        _ => Instruction::Unsupported(opcode.address()),
    }
}
