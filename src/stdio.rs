//! Standard stream plumbing shared by the binaries.

use std::io::{self, Read, Write};

/// Read all of standard input. An unreadable stream counts as empty.
pub fn read_stdin() -> String {
    let mut buf = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut buf) {
        log::error!("couldn't read standard input: {}", err);
        buf.clear();
    }
    buf
}

/// Write `text` to standard output as is, without a trailing newline.
pub fn write_stdout(text: &str) {
    let mut stdout = io::stdout();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
    {
        log::error!("couldn't write output: {}", err);
    }
}
