use crate::inspect;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, PartialEq, Eq, Debug)]
#[command(name = "varvec_inspect")]
#[command(about = "Dumps the elements of an encoded variant vector", long_about = None)]
pub struct Args {
    /// Encoded buffer to inspect; standard input if absent
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// The input is ASCII hex rather than raw bytes
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Bytes following the vector are an error
    #[arg(long)]
    pub exact: bool,
}

impl Args {
    /// Reads the encoded buffer from `path`, or else from `stdin`, decoding hex if asked.
    pub fn read_input(&self, mut stdin: impl Read) -> Result<Vec<u8>> {
        let raw = match &self.path {
            Some(path) => fs::read(path).with_context(|| format!("Reading {path:?}"))?,
            None => {
                let mut raw = vec![];
                stdin.read_to_end(&mut raw).context("Reading stdin")?;
                raw
            }
        };
        if !self.hex {
            return Ok(raw);
        }
        let text = String::from_utf8(raw).context("Hex input is not text")?;
        inspect::parse_hex(&text)
    }
}
