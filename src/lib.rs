//! A disassembler for CHIP-8 programs. Every 16 bit instruction word is decoded into
//! a short mnemonic form following the opcode table described
//! [here](https://en.wikipedia.org/wiki/CHIP-8#Opcode_table), and can be rendered as a
//! bitmap of its bits. The text user interface relies on the cursive library.
pub mod chip;
