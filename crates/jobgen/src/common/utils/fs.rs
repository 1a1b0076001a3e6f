use std::io::{BufRead, Write};
use std::path::Path;

/// Creates `path` (including its parents) if it does not exist yet.
/// Returns `true` if the directory had to be created.
pub fn ensure_directory(path: &Path) -> std::io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    Ok(true)
}

/// Asks the user whether an existing file at `path` should be overwritten.
/// Only an answer starting with `y` (in any case) counts as a confirmation.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    write!(output, "\"{}\" exists.  Overwrite? [yN] ", path.display())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.to_lowercase().starts_with('y'))
}
