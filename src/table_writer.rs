use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::sine::quarter_sine;

pub const OUTPUT_FILE: &str = "sine_quarter.txt";

pub fn format_amplitude(value: u16) -> String {
    format!("{:03x}", value)
}

pub fn write_table<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for value in quarter_sine() {
        writeln!(writer, "{}", format_amplitude(value))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
