use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::sine::AMPLITUDE_MAX;

pub fn parse_table(text: &str) -> Result<Vec<u16>> {
    let mut values = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }

        let value = u16::from_str_radix(entry, 16)
            .map_err(|_| anyhow!("line {}: invalid hex value {:?}", index + 1, entry))?;
        if value > AMPLITUDE_MAX {
            return Err(anyhow!(
                "line {}: value {:#05x} exceeds the 9-bit range",
                index + 1,
                value
            ));
        }

        values.push(value);
    }

    if values.is_empty() {
        return Err(anyhow!("table contains no samples"));
    }

    Ok(values)
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Vec<u16>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_table(&text)
}
