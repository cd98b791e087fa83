use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{ensure, Result};
use clap::Parser;
use xorcrack::{encode::hex::to_hex, encrypt::xor};

/// XOR input against a repeating key and print the result as hex.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Key text
    key: String,

    /// Input file; stdin when omitted
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(!args.key.is_empty(), "key must not be empty");

    let mut bytes = Vec::new();
    match &args.path {
        Some(path) => File::open(path)?.read_to_end(&mut bytes)?,
        None => io::stdin().read_to_end(&mut bytes)?,
    };

    println!("{}", to_hex(&xor::repeating(&bytes, args.key.as_bytes())));

    Ok(())
}
