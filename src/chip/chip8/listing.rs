use std::io::{self, Write};

use log::{debug, warn};

use crate::chip::chip8::{
    art::{sprite_rows, word_art},
    constants::CHIP8_PROGRAM_START,
    opcodes::Opcode,
};

/// Selects the columns written in front of each decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingOptions {
    /// Prefix each line with the decimal address of the word.
    pub addresses: bool,

    /// Include the bitmap rendering of the word.
    pub art: bool,

    /// Include the raw word in hexadecimal.
    pub hex: bool,
}

impl ListingOptions {
    /// Only the decoded instruction, nothing else.
    pub fn plain() -> Self {
        ListingOptions {
            addresses: false,
            art: false,
            hex: false,
        }
    }
}

impl Default for ListingOptions {
    fn default() -> Self {
        ListingOptions {
            addresses: true,
            art: true,
            hex: true,
        }
    }
}

/// What a listing run saw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Number of words decoded.
    pub words: usize,

    /// Number of words without a mnemonic.
    pub unsupported: usize,

    /// Whether the program ended with a lone byte that was skipped.
    pub trailing_byte: bool,
}

/// Splits a program into big-endian words, paired with the address each
/// word is loaded at. A trailing odd byte is not part of any word.
pub fn words(program: &[u8]) -> impl Iterator<Item = (u16, Opcode)> + '_ {
    program
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            (
                CHIP8_PROGRAM_START.wrapping_add((i * 2) as u16),
                Opcode::new(&[pair[0], pair[1]]),
            )
        })
}

/// Formats one listing line:
/// `[<address> | ][<art> ][<word>: ]<instruction>`.
pub fn format_line(address: u16, opcode: Opcode, options: &ListingOptions) -> String {
    let mut line = String::new();
    if options.addresses {
        line.push_str(&format!("{:04} | ", address));
    }
    if options.art {
        line.push_str(&word_art(opcode.word()));
        line.push(' ');
    }
    if options.hex {
        line.push_str(&format!("{}: ", opcode));
    }
    line.push_str(&opcode.decode().to_string());
    line
}

/// Writes one line per word of `program` to `out`.
pub fn write_listing<W: Write>(
    program: &[u8],
    options: &ListingOptions,
    out: &mut W,
) -> io::Result<ListingSummary> {
    let mut summary = start_summary(program);
    for (address, opcode) in words(program) {
        writeln!(out, "{}", format_line(address, opcode, options))?;
        count(&mut summary, opcode);
    }
    finish_summary(&summary);
    Ok(summary)
}

/// Writes every word of `program` as two bitmap rows, high byte first.
pub fn write_sprites<W: Write>(program: &[u8], out: &mut W) -> io::Result<ListingSummary> {
    let mut summary = start_summary(program);
    for (_, opcode) in words(program) {
        let [high, low] = sprite_rows(opcode.word());
        writeln!(out, "{}\n{}", high, low)?;
        count(&mut summary, opcode);
    }
    finish_summary(&summary);
    Ok(summary)
}

fn start_summary(program: &[u8]) -> ListingSummary {
    let trailing_byte = program.len() % 2 == 1;
    if trailing_byte {
        warn!(
            "Program has an odd length of {} bytes, ignoring the last byte",
            program.len()
        );
    }
    ListingSummary {
        trailing_byte,
        ..ListingSummary::default()
    }
}

fn count(summary: &mut ListingSummary, opcode: Opcode) {
    summary.words += 1;
    if !opcode.decode().is_supported() {
        summary.unsupported += 1;
    }
}

fn finish_summary(summary: &ListingSummary) {
    debug!(
        "Decoded {} words, {} without a mnemonic",
        summary.words, summary.unsupported
    );
}
