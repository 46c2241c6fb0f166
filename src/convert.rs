//! Converting Unicode Braille text to BRF.

use crate::{
    config::Options,
    diagnostic::{Diagnostic, Sink},
    table::{self, BLANK_CELL, NBSP},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// The cell that upstream encoders sometimes emit more than once in a row.
pub const REPEATED_GLYPH: char = '\u{2839}';

/// Converts Unicode Braille text to BRF according to a set of `Options`.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert `text`, reporting anything unmappable to `sink`.
    ///
    /// Spaces are normalized first, then repeated `⠹` cells are collapsed, then each character is
    /// translated in turn. Mapped cells become their BRF character, unmapped Braille cells become
    /// the placeholder, and everything else passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unibrf::{config::Options, convert::Converter};
    /// let converter = Converter::new(Options {
    ///     placeholder: '*',
    ///     ..Options::default()
    /// });
    /// let mut diagnostics = Vec::new();
    /// assert_eq!("A*B", converter.convert("⠁⣿⠃", &mut diagnostics));
    /// assert_eq!(1, diagnostics.len());
    /// ```
    pub fn convert<S: Sink>(&self, text: &str, mut sink: S) -> String {
        let normalized = normalize_spaces(text);
        let collapsed = if self.options.collapse_repeated {
            collapse_repeated(&normalized)
        } else {
            Cow::Borrowed(&*normalized)
        };

        collapsed
            .chars()
            .map(|c| self.translate_char(c, &mut sink))
            .collect()
    }

    /// Translate a single character.
    ///
    /// Expects input that has already been through `normalize_spaces` and, if enabled,
    /// `collapse_repeated`.
    fn translate_char<S: Sink>(&self, c: char, sink: &mut S) -> char {
        match table::lookup(c) {
            Some(brf) => brf,
            None if table::is_braille(c) => {
                sink.report(Diagnostic::UnmappedGlyph { glyph: c });
                self.options.placeholder
            }
            None => c,
        }
    }
}

/// Convert `text` with the default options.
///
/// # Examples
///
/// ```rust
/// # use unibrf::{convert::unicode_to_brf, diagnostic::Ignore};
/// assert_eq!("HELLO", unicode_to_brf("⠓⠑⠇⠇⠕", Ignore));
/// assert_eq!("A B", unicode_to_brf("⠁⠀⠃", Ignore));
/// ```
pub fn unicode_to_brf<S: Sink>(text: &str, sink: S) -> String {
    Converter::default().convert(text, sink)
}

/// Replace non-breaking spaces and blank Braille cells with plain spaces.
///
/// # Examples
///
/// ```rust
/// # use unibrf::convert::normalize_spaces;
/// assert_eq!("a b c", normalize_spaces("a\u{a0}b\u{2800}c"));
/// ```
pub fn normalize_spaces(text: &str) -> Cow<str> {
    let spaces = &[NBSP, BLANK_CELL][..];
    if !text.contains(spaces) {
        return text.into();
    }
    text.replace(spaces, " ").into()
}

/// Collapse every run of two or more `⠹` cells into one.
///
/// Other repeated cells are left as they are.
///
/// # Examples
///
/// ```rust
/// # use unibrf::convert::collapse_repeated;
/// assert_eq!("⠹test", collapse_repeated("⠹⠹⠹test"));
/// assert_eq!("⠁⠁", collapse_repeated("⠁⠁"));
/// ```
pub fn collapse_repeated(text: &str) -> Cow<str> {
    lazy_static! {
        static ref RE: Regex = Regex::new("\u{2839}{2,}").unwrap();
    }
    RE.replace_all(text, "\u{2839}")
}
