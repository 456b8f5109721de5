use std::env;
use std::io::{self, BufWriter, Write};

use log::info;

use chip_8_disassembler::chip::{
    chip8::{
        listing::{self, ListingOptions},
        Chip8,
    },
    Chip, LoadProgramError,
};

/// Error type for errors that occur during parsing the command line arguments,
/// loading the program and writing the listing.
enum Error {
    InvalidUsage(String),
    InvalidProgram(LoadProgramError),
    Output(io::Error),
}

/// The parsed command line.
struct Arguments {
    path: String,
    options: ListingOptions,
    sprites: bool,
}

fn parse_args(args: &[String]) -> Result<Arguments, Error> {
    let mut options = ListingOptions::default();
    let mut sprites = false;
    let mut path = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--plain" => options = ListingOptions::plain(),
            "--no-addresses" => options.addresses = false,
            "--no-art" => options.art = false,
            "--no-hex" => options.hex = false,
            "--sprite" => sprites = true,
            arg if !arg.starts_with('-') && path.is_none() => path = Some(arg.to_string()),
            _ => return Err(Error::InvalidUsage(format!("Unknown argument {}", arg))),
        }
    }

    match path {
        Some(path) => Ok(Arguments {
            path,
            options,
            sprites,
        }),
        None => Err(Error::InvalidUsage(
            "Expecting path to the program to disassemble as command line argument.".to_string(),
        )),
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    let arguments = parse_args(&args)?;

    let mut chip8 = Chip8::new();
    chip8
        .load_program(&arguments.path)
        .map_err(Error::InvalidProgram)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = if arguments.sprites {
        listing::write_sprites(chip8.program(), &mut out)
    } else {
        listing::write_listing(chip8.program(), &arguments.options, &mut out)
    };
    let summary = written.map_err(Error::Output)?;
    out.flush().map_err(Error::Output)?;

    info!(
        "Disassembled {} words of {}, {} unsupported",
        summary.words, arguments.path, summary.unsupported
    );
    Ok(())
}

/// Writes the listing of the program given on the command line to stdout.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidUsage(message) => write!(
                f,
                "Usage: chip-8-disassembler [--plain] [--no-addresses] [--no-art] [--no-hex] \
                 [--sprite] <program>\n{}",
                message
            ),
            Error::InvalidProgram(error) => write!(f, "{}", error),
            Error::Output(error) => write!(f, "Could not write listing: {}", error),
        }
    }
}
