use anyhow::Result;
use clap::Parser;
use xorcrack::{analyze::single_byte::break_single_byte, encode::hex::from_hex, score::ENGLISH};

/// Recover the key of a single-byte XOR ciphertext.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Hex-encoded ciphertext
    hex: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let bytes = from_hex(args.hex.trim())?;
    let found = break_single_byte(&bytes, &ENGLISH)?;

    println!("{found}");
    println!("{}", String::from_utf8_lossy(&found.plaintext));

    Ok(())
}
