//! Line input for the interactive shell

use std::io::{self, Write};

/// Print the prompt and read one line from stdin.
pub fn readline() -> Result<String, String> {
    write!(io::stdout(), "feint> ").map_err(|e| e.to_string())?;
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}
