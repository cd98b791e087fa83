use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use xorcrack::{analyze::multibyte::break_repeating_key, encode::base64::from_base64, score::ENGLISH};

/// Break repeating-key XOR ciphertext given as base64.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Base64 file; stdin when omitted. Line breaks are ignored.
    path: Option<PathBuf>,

    /// Smallest key length to try
    #[arg(long, default_value_t = 2)]
    min_length: usize,

    /// Key length search bound, exclusive
    #[arg(long, default_value_t = 40)]
    max_length: usize,

    /// Block pairs averaged per candidate length
    #[arg(long, default_value_t = 8)]
    trials: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut base64 = String::new();
    for line in reader.lines() {
        base64 += line?.trim();
    }
    let bytes = from_base64(&base64)?;

    let recovered =
        break_repeating_key(&bytes, args.min_length, args.max_length, args.trials, &ENGLISH)?;

    println!("Most likely {}", recovered.estimate);
    println!("Key: {}", String::from_utf8_lossy(&recovered.key));
    println!("{}", String::from_utf8_lossy(&recovered.plaintext));

    Ok(())
}
