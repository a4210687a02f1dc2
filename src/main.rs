use anyhow::Result;

use sine_table_gen::sine::TABLE_LEN;
use sine_table_gen::table_writer::{write_table, OUTPUT_FILE};

fn main() -> Result<()> {
    println!("Quarter Sine Table Generator");
    println!("----------------------------");
    println!("{} samples, 9-bit amplitude, one 3-digit hex value per line.", TABLE_LEN);
    println!();

    write_table(OUTPUT_FILE)?;

    println!("Wrote {} samples to {}", TABLE_LEN, OUTPUT_FILE);
    Ok(())
}
