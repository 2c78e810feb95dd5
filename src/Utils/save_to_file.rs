use super::number_format::savetxt_repr;
use crate::errors::StoichResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `contents` as is, overwriting an existing file.
pub fn write_text(path: &Path, contents: &str) -> StoichResult<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Delimited text of a matrix in the layout of NumPy `savetxt`: `%.18e`
/// values, no header, one newline terminated line per row.
pub fn format_savetxt(rows: &[Vec<f64>], delimiter: &str) -> String {
    let mut text = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|x| savetxt_repr(*x)).collect();
        text.push_str(&line.join(delimiter));
        text.push('\n');
    }
    text
}

pub fn savetxt(path: &Path, rows: &[Vec<f64>], delimiter: &str) -> StoichResult<()> {
    write_text(path, &format_savetxt(rows, delimiter))
}
