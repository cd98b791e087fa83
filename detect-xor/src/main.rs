use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use xorcrack::{
    analyze::single_byte::break_single_byte_above, encode::hex::from_hex, score::ENGLISH,
};

/// Find the single-byte XOR ciphertext hidden among many hex lines.
///
/// Each line is attacked with the best score seen so far as the floor, so a
/// line is only reported when it beats every line before it.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// File of hex lines; stdin when omitted
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut floor = 0;
    for (number, line) in reader.lines().enumerate() {
        let bytes = from_hex(line?.trim())?;

        if let Ok(found) = break_single_byte_above(&bytes, &ENGLISH, floor) {
            floor = found.score;
            println!("Line {}  {}", number + 1, found);
            println!("{}", String::from_utf8_lossy(&found.plaintext));
        }
    }

    Ok(())
}
