extern crate unibrf;

use std::env;
use unibrf::{diagnostic, stdio, unicode_to_brf};

/// Converts Unicode Braille text to Braille Ready Format.
///
/// The first argument is the text to convert, taken verbatim: it's never parsed as a flag.
/// Standard input is read if there is no argument. Options, the table dump and batch conversion
/// live in `unibrf-tool`.
fn main() {
    env_logger::init();

    let text = match env::args_os().nth(1) {
        Some(arg) => arg.to_string_lossy().into_owned(),
        None => stdio::read_stdin(),
    };

    let brf = unicode_to_brf(&text, diagnostic::stderr());
    stdio::write_stdout(&brf);
}
