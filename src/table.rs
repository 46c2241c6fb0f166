//! The fixed mapping from Unicode Braille cells to ASCII BRF characters.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// The Unicode Braille Patterns block.
pub const BRAILLE_RANGE: RangeInclusive<char> = '\u{2800}'..='\u{28ff}';

/// The empty Braille cell.
pub const BLANK_CELL: char = '\u{2800}';

/// Non-breaking space.
pub const NBSP: char = '\u{00a0}';

/// Six-dot Braille cells and their BRF characters, in BRF order.
const BRAILLE_TO_BRF: [(char, char); 64] = [
    // Never reached from `convert`, which turns blank cells into spaces first.
    ('\u{2800}', ' '),
    ('\u{282e}', '!'),
    ('\u{2810}', '"'),
    ('\u{283c}', '#'),
    ('\u{282b}', '$'),
    ('\u{2829}', '%'),
    ('\u{282f}', '&'),
    ('\u{2804}', '\''),
    ('\u{2837}', '('),
    ('\u{283e}', ')'),
    ('\u{2821}', '*'),
    ('\u{282c}', '+'),
    ('\u{2820}', ','),
    ('\u{2824}', '-'),
    ('\u{2828}', '.'),
    ('\u{280c}', '/'),
    ('\u{2834}', '0'),
    ('\u{2802}', '1'),
    ('\u{2806}', '2'),
    ('\u{2812}', '3'),
    ('\u{2832}', '4'),
    ('\u{2822}', '5'),
    ('\u{2816}', '6'),
    ('\u{2836}', '7'),
    ('\u{2826}', '8'),
    ('\u{2814}', '9'),
    ('\u{2831}', ':'),
    ('\u{2830}', ';'),
    ('\u{2823}', '<'),
    ('\u{283f}', '='),
    ('\u{281c}', '>'),
    ('\u{2839}', '?'),
    ('\u{2808}', '@'),
    ('\u{2801}', 'A'),
    ('\u{2803}', 'B'),
    ('\u{2809}', 'C'),
    ('\u{2819}', 'D'),
    ('\u{2811}', 'E'),
    ('\u{280b}', 'F'),
    ('\u{281b}', 'G'),
    ('\u{2813}', 'H'),
    ('\u{280a}', 'I'),
    ('\u{281a}', 'J'),
    ('\u{2805}', 'K'),
    ('\u{2807}', 'L'),
    ('\u{280d}', 'M'),
    ('\u{281d}', 'N'),
    ('\u{2815}', 'O'),
    ('\u{280f}', 'P'),
    ('\u{281f}', 'Q'),
    ('\u{2817}', 'R'),
    ('\u{280e}', 'S'),
    ('\u{281e}', 'T'),
    ('\u{2825}', 'U'),
    ('\u{2827}', 'V'),
    ('\u{283a}', 'W'),
    ('\u{282d}', 'X'),
    ('\u{283d}', 'Y'),
    ('\u{2835}', 'Z'),
    ('\u{282a}', '['),
    ('\u{2833}', '\\'),
    ('\u{283b}', ']'),
    ('\u{2818}', '^'),
    ('\u{2838}', '_'),
];

static TABLE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut table = BRAILLE_TO_BRF.iter().copied().collect::<HashMap<_, _>>();
    table.insert(' ', ' ');
    table.insert(NBSP, ' ');
    table
});

/// Look up the BRF character for `c`.
///
/// # Examples
///
/// ```rust
/// # use unibrf::table::lookup;
/// assert_eq!(Some('H'), lookup('⠓'));
/// assert_eq!(Some(' '), lookup('\u{a0}'));
/// assert_eq!(None, lookup('\u{28ff}'));
/// assert_eq!(None, lookup('x'));
/// ```
pub fn lookup(c: char) -> Option<char> {
    TABLE.get(&c).copied()
}

/// Returns if `c` is a cell of the Braille Patterns block, mapped or not.
pub fn is_braille(c: char) -> bool {
    BRAILLE_RANGE.contains(&c)
}

/// A single Braille row of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The code point, formatted as `U+XXXX`.
    pub code: String,

    /// The Unicode Braille cell.
    pub glyph: char,

    /// Its BRF character.
    pub brf: char,
}

/// Every Braille row of the table in code point order.
pub fn entries() -> impl Iterator<Item = Entry> {
    let mut rows = BRAILLE_TO_BRF.to_vec();
    rows.sort_by_key(|&(glyph, _)| glyph);
    rows.into_iter().map(|(glyph, brf)| Entry {
        code: format!("U+{:04X}", glyph as u32),
        glyph,
        brf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_covers_every_six_dot_cell() {
        for code in 0x2800..=0x283f {
            let c = std::char::from_u32(code).unwrap();
            assert!(lookup(c).is_some(), "U+{:04X} is missing", code);
        }
    }

    #[test]
    fn eight_dot_cells_are_unmapped() {
        for code in 0x2840..=0x28ff {
            let c = std::char::from_u32(code).unwrap();
            assert_eq!(lookup(c), None);
            assert!(is_braille(c));
        }
    }

    #[test]
    fn brf_characters_are_distinct() {
        let brf = BRAILLE_TO_BRF
            .iter()
            .map(|&(_, b)| b)
            .collect::<HashSet<_>>();
        assert_eq!(brf.len(), BRAILLE_TO_BRF.len());
    }

    #[test]
    fn brf_characters_are_printable_ascii() {
        for &(_, b) in BRAILLE_TO_BRF.iter() {
            assert!((' '..='_').contains(&b));
        }
    }

    #[test]
    fn spaces_map_to_space() {
        assert_eq!(lookup(' '), Some(' '));
        assert_eq!(lookup(NBSP), Some(' '));
        assert_eq!(lookup(BLANK_CELL), Some(' '));
    }

    #[test]
    fn letters_map_to_uppercase() {
        assert_eq!(lookup('⠁'), Some('A'));
        assert_eq!(lookup('⠵'), Some('Z'));
        assert_eq!(lookup('⠹'), Some('?'));
    }

    #[test]
    fn braille_range_is_inclusive() {
        assert!(is_braille('\u{2800}'));
        assert!(is_braille('\u{28ff}'));
        assert!(!is_braille('\u{27ff}'));
        assert!(!is_braille('\u{2900}'));
        assert!(!is_braille('a'));
    }

    #[test]
    fn entries_are_sorted_by_code_point() {
        let entries = entries().collect::<Vec<_>>();
        assert_eq!(entries.len(), 64);
        assert_eq!(entries[0].code, "U+2800");
        assert_eq!(entries[63].code, "U+283F");
        assert!(entries.windows(2).all(|w| w[0].glyph < w[1].glyph));
    }

    #[test]
    fn entries_agree_with_lookup() {
        for entry in entries() {
            assert_eq!(lookup(entry.glyph), Some(entry.brf));
        }
    }
}
