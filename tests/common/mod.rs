use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str = "type,product,quantity,name,email,address,method";

/// Writes an action script with the standard header followed by `rows`.
pub fn script(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", HEADER)?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

pub fn order_row(product: &str, quantity: u32) -> String {
    format!("order,{product},{quantity},Ada,ada@example.com,1 Analytical St,")
}
