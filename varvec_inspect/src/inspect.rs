use anyhow::{anyhow, Result};
use itertools::Itertools;
use std::env;
use std::io::Write;
use varvec_types::serde::{ReadResult, VariantReader, VariantRef, VariantTag};
use varvec_types::DecodeError;

const ENV_VAR_PREVIEW_LEN: &str = "VARVEC_PREVIEW_LEN";
const DEFAULT_PREVIEW_LEN: usize = 32;

pub struct Config {
    /// Payload bytes shown per element.
    pub preview_len: usize,
}
impl Config {
    pub fn from_env() -> Self {
        let preview_len = env::var(ENV_VAR_PREVIEW_LEN)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PREVIEW_LEN);
        Self { preview_len }
    }
}

/// Whitespace between and within bytes is ignored.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| anyhow!("Not a hex digit: {c:?}"))
        })
        .collect::<Result<Vec<u8>>>()?;
    if digits.len() % 2 != 0 {
        return Err(anyhow!("Odd count of hex digits: {}", digits.len()));
    }
    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Prints the count, then one line per element, then any trailing bytes.
///
/// Elements preceding a decode error are still printed.
pub fn inspect(buf: &[u8], conf: &Config, exact: bool, out: &mut impl Write) -> Result<()> {
    let mut r = VariantReader::new(buf)?;
    writeln!(out, "elements_count {}", r.declared_count())?;
    writeln!(out, "{:>8}  {:<4}  {:>8}  preview", "offset", "tag", "len")?;

    loop {
        let offset = r.position();
        let var = match r.deser()? {
            ReadResult::EOF => break,
            ReadResult::Some(_, var) => var,
        };
        let len = var
            .payload()
            .map_or_else(|| String::from("-"), |b| b.len().to_string());
        writeln!(
            out,
            "{:>8}  {:<4}  {:>8}  {}",
            offset,
            VariantTag::from(&var).to_string(),
            len,
            preview(var, conf.preview_len)
        )?;
    }

    let consumed = r.position();
    if consumed < buf.len() {
        writeln!(out, "trailing {} bytes at offset {}", buf.len() - consumed, consumed)?;
        if exact {
            return Err(DecodeError::TrailingData {
                consumed,
                len: buf.len(),
            }
            .into());
        }
    }
    Ok(())
}

fn preview(var: VariantRef<'_>, preview_len: usize) -> String {
    let (payload, is_text) = match var {
        VariantRef::UInt(i) => return i.to_string(),
        VariantRef::Text(b) => (b, true),
        VariantRef::Blob(b) => (b, false),
    };
    let (shown, ellipsis) = if payload.len() > preview_len {
        (&payload[..preview_len], "...")
    } else {
        (payload, "")
    };
    if is_text {
        format!("{:?}{ellipsis}", String::from_utf8_lossy(shown))
    } else {
        let hex = shown.iter().map(|b| format!("{b:02x}")).join(" ");
        format!("[{hex}]{ellipsis}")
    }
}
