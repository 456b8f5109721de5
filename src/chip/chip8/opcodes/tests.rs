use rand::{thread_rng, Rng};
use ux::{u12, u4};

use crate::chip::chip8::opcodes::{decode, Instruction, Opcode, Register};

fn reg(index: u8) -> Register {
    Register::new(u4::new(index))
}

fn assert_decodes_to(word: u16, text: &str) {
    assert_eq!(decode(word).to_string(), text, "word {:04x}", word);
}

#[test]
fn test_register_names() {
    assert_eq!(reg(0).to_string(), "V0");
    assert_eq!(reg(10).to_string(), "VA");
    assert_eq!(reg(15).to_string(), "VF");
}

#[test]
fn test_opcode_fields() {
    let opcode = Opcode::new(&[0xD1, 0x2F]);
    assert_eq!(opcode.word(), 0xD12F);
    assert_eq!(opcode.instruction_class(), u4::new(0xD));
    assert_eq!(opcode.x(), reg(0x1));
    assert_eq!(opcode.y(), reg(0x2));
    assert_eq!(opcode.n(), u4::new(0xF));
    assert_eq!(opcode.value(), 0x2F);
    assert_eq!(opcode.address(), u12::new(0x12F));
    assert_eq!(opcode.to_string(), "d12f");
    assert_eq!(Opcode::from(0xD12F), opcode);
}

#[test]
fn test_system() {
    assert_eq!(decode(0x00E0), Instruction::ClearDisplay);
    assert_eq!(decode(0x00EE), Instruction::Return);
    assert_eq!(decode(0x0123), Instruction::Unsupported(u12::new(0x123)));
    assert_decodes_to(0x00E0, "dcl");
    assert_decodes_to(0x00EE, "ret");
    assert_decodes_to(0x0123, "unsuported 291");
}

#[test]
fn test_jump_and_call() {
    assert_eq!(decode(0x1234), Instruction::Jump(u12::new(0x234)));
    assert_decodes_to(0x1234, "jmp 564");
    assert_decodes_to(0x2CAF, "cll 3247");
    assert_decodes_to(0xB300, "jwo 768");
}

#[test]
fn test_register_and_value() {
    assert_eq!(decode(0x6A15), Instruction::Load(reg(0xA), 0x15));
    assert_decodes_to(0x6A15, "mov VA 21");
    assert_decodes_to(0x34AF, "je  V4 175");
    assert_decodes_to(0x4B01, "jne VB 1");
    assert_decodes_to(0x7FFF, "add VF 255");
}

#[test]
fn test_class_5_shares_skip_if_equal() {
    assert_eq!(decode(0x5120), Instruction::SkipIfEqual(reg(1), 0x20));
    assert_eq!(decode(0x5120).to_string(), decode(0x3120).to_string());
}

#[test]
fn test_register_operations() {
    assert_eq!(decode(0x8AB4), Instruction::AddRegister(reg(0xA), reg(0xB)));
    assert_decodes_to(0x8120, "mov V1 V2");
    assert_decodes_to(0x8121, "or V1 V2");
    assert_decodes_to(0x8122, "and V1 V2");
    assert_decodes_to(0x8123, "xor V1 V2");
    assert_decodes_to(0x8AB4, "add VA VB");
    assert_decodes_to(0x8125, "sub V1 V2");
    assert_decodes_to(0x8126, "sft V1");
    assert_decodes_to(0x9AB0, "jne VA VB");
}

#[test]
fn test_unmapped_register_operations() {
    assert_eq!(decode(0x8AB9), Instruction::Unsupported(u12::new(0xAB9)));
    for n in 0x7..=0xF {
        let word = 0x8120 | n;
        assert!(!decode(word).is_supported(), "word {:04x}", word);
    }
}

#[test]
fn test_index_random_and_draw() {
    assert_decodes_to(0xA2F0, "mov I 752");
    assert_decodes_to(0xCAFF, "rnd VA 2815");
    assert_eq!(
        decode(0xD12F),
        Instruction::Draw(reg(1), reg(2), u4::new(0xF))
    );
    assert_decodes_to(0xD12F, "dsp V1 V2 15");
}

#[test]
fn test_keys() {
    assert_eq!(decode(0xE3A1), Instruction::SkipIfKeyPressed(reg(3)));
    assert_eq!(decode(0xE307), Instruction::SkipIfKeyNotPressed(reg(3)));
    assert_decodes_to(0xE3A1, "je  KEY V3");
    assert_decodes_to(0xE307, "jne KEY V3");
    assert_decodes_to(0xE39E, "unsuported 926");
}

#[test]
fn test_class_f() {
    assert_eq!(decode(0xF033), Instruction::StoreBcd(reg(0)));
    assert_decodes_to(0xF507, "mov V5 TIMER");
    assert_decodes_to(0xF50A, "awk V5");
    assert_decodes_to(0xF515, "mov TIMER V5");
    assert_decodes_to(0xF518, "mov SOUND V5");
    assert_decodes_to(0xF51E, "add I V5");
    assert_decodes_to(0xF529, "msp V5");
    assert_decodes_to(0xF033, "bcd V0");
    assert_decodes_to(0xF555, "pat V5");
    assert_decodes_to(0xF565, "lat V5");
    assert_decodes_to(0xF5FF, "unsuported 1535");
}

#[test]
fn test_every_word_decodes() {
    for word in 0..=u16::MAX {
        let instruction = decode(word);
        assert_eq!(instruction, decode(word));
        assert_eq!(instruction, Opcode::from(word).decode());
        assert!(!instruction.to_string().is_empty());
    }
}

#[test]
fn test_unsupported_keeps_payload() {
    for word in 0..=u16::MAX {
        if let Instruction::Unsupported(payload) = decode(word) {
            assert_eq!(u16::from(payload), word & 0x0FFF);
        }
    }
}

#[test]
fn test_random_words_use_their_fields() {
    let mut rng = thread_rng();
    for _ in 0..1000 {
        let payload: u16 = rng.gen_range(0..0x1000);
        let x = ((payload >> 8) & 0xF) as u8;

        assert_eq!(decode(0x1000 | payload), Instruction::Jump(u12::new(payload)));
        assert_eq!(decode(0xA000 | payload), Instruction::LoadIndex(u12::new(payload)));
        assert_eq!(
            decode(0x7000 | payload),
            Instruction::AddValue(reg(x), (payload & 0xFF) as u8)
        );
        assert_eq!(
            decode(0xC000 | payload),
            Instruction::Random(reg(x), u12::new(payload))
        );
    }
}
