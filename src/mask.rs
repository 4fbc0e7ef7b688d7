//! Format-pattern masking for displayed text.
//!
//! A [`Pattern`] turns a raw value into a formatted display string and back,
//! reversibly. Patterns are written with slot tokens and literal delimiter
//! characters:
//!
//! | Token | Accepts            | Conversion |
//! |-------|--------------------|------------|
//! | `#`   | digit              | none       |
//! | `A`   | alphabetic         | uppercase  |
//! | `a`   | alphabetic         | lowercase  |
//! | `N`   | alphanumeric       | uppercase  |
//! | `n`   | alphanumeric       | lowercase  |
//! | `X`   | any delimiter      | none       |
//!
//! Any other character is a literal and is filled in automatically while
//! masking. Unmasking strips every delimiter character, so the invariant
//! `unmask(mask(unmask(x))) == unmask(x)` holds for all inputs.
//!
//! ```rust
//! use bubbletea_textfield::mask::{unmask, Pattern};
//!
//! let phone = Pattern::new("(###) ###-####");
//! assert_eq!(phone.mask("5551234567"), "(555) 123-4567");
//! assert_eq!(unmask("(555) 123-4567"), "5551234567");
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Digit,
    Alpha { upper: bool },
    Alnum { upper: bool },
    Delimiter,
    Literal(char),
}

impl Token {
    fn accepts(self, c: char) -> bool {
        match self {
            Token::Digit => c.is_ascii_digit(),
            Token::Alpha { .. } => c.is_alphabetic(),
            Token::Alnum { .. } => c.is_alphanumeric(),
            Token::Delimiter => is_delimiter(c),
            Token::Literal(l) => c == l,
        }
    }

    fn convert(self, c: char) -> char {
        match self {
            Token::Alpha { upper: true } | Token::Alnum { upper: true } => {
                c.to_uppercase().next().unwrap_or(c)
            }
            Token::Alpha { upper: false } | Token::Alnum { upper: false } => {
                c.to_lowercase().next().unwrap_or(c)
            }
            _ => c,
        }
    }
}

/// Returns whether `c` belongs to the delimiter set stripped by [`unmask`].
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '-' | '!'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | '('
            | ')'
            | '_'
            | '+'
            | '|'
            | '~'
            | '='
            | '`'
            | '{'
            | '}'
            | '['
            | ']'
            | ':'
            | '"'
            | ';'
            | '\''
            | '<'
            | '>'
            | '?'
            | ','
            | '.'
            | '/'
            | '\\'
            | ' '
    )
}

/// Strips every delimiter character from `text`.
pub fn unmask(text: &str) -> String {
    text.chars().filter(|&c| !is_delimiter(c)).collect()
}

/// A parsed mask pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
    source: String,
}

impl Pattern {
    /// Parses a pattern string. Parsing cannot fail; unknown characters
    /// become literals.
    pub fn new(source: &str) -> Self {
        let tokens = source
            .chars()
            .map(|c| match c {
                '#' => Token::Digit,
                'A' => Token::Alpha { upper: true },
                'a' => Token::Alpha { upper: false },
                'N' => Token::Alnum { upper: true },
                'n' => Token::Alnum { upper: false },
                'X' => Token::Delimiter,
                other => Token::Literal(other),
            })
            .collect();
        Self {
            tokens,
            source: source.to_string(),
        }
    }

    /// The pattern string this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Display length of a fully filled pattern, in runes.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether the pattern has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of fillable slots; bounds how many runes a value can hold.
    pub fn capacity(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| !matches!(t, Token::Literal(_)))
            .count()
    }

    /// Formats `text` through the pattern.
    ///
    /// Literals are auto-filled, slots consume matching runes (applying
    /// case conversion), and the walk stops at the first rune a slot
    /// rejects. Runes beyond the pattern are dropped.
    pub fn mask(&self, text: &str) -> String {
        if self.tokens.is_empty() || text.is_empty() {
            return text.to_string();
        }

        let runes: Vec<char> = text.chars().collect();
        let mut ti = 0usize;
        let mut out = String::new();

        for tok in &self.tokens {
            let ch = runes.get(ti).copied();
            match *tok {
                Token::Literal(l) => {
                    if ch == Some(l) {
                        ti += 1;
                    }
                    out.push(l);
                }
                slot => match ch {
                    Some(c) if slot.accepts(c) => {
                        out.push(slot.convert(c));
                        ti += 1;
                    }
                    _ => return out,
                },
            }
        }

        out
    }

    /// Canonicalizes a raw value: strips delimiters, masks, and strips
    /// again. The result is what the field stores when a mask is active.
    pub fn normalize(&self, text: &str) -> String {
        unmask(&self.mask(&unmask(text)))
    }

    /// Display caret position for an unmasked prefix of the value.
    ///
    /// Auto-filled trailing literals count, so after typing `12` into
    /// `##-##` the caret sits past the `-`.
    pub fn masked_cursor(&self, unmasked_prefix: &str) -> usize {
        self.mask(unmasked_prefix).chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_a_phone_number() {
        let p = Pattern::new("(###) ###-####");
        assert_eq!(p.mask("5551234567"), "(555) 123-4567");
        assert_eq!(p.mask(""), "");
        assert_eq!(p.mask("5"), "(5");
    }

    #[test]
    fn partial_fill_includes_trailing_literals() {
        let p = Pattern::new("##-##");
        assert_eq!(p.mask("12"), "12-");
        assert_eq!(p.mask("123"), "12-3");
    }

    #[test]
    fn stops_at_first_rejected_rune() {
        let p = Pattern::new("####");
        assert_eq!(p.mask("12x4"), "12");
    }

    #[test]
    fn case_conversion_tokens() {
        let upper = Pattern::new("AA-aa");
        assert_eq!(upper.mask("abCD"), "AB-cd");
        let alnum = Pattern::new("NNnn");
        assert_eq!(alnum.mask("a1B2"), "A1b2");
    }

    #[test]
    fn unmask_strips_delimiters() {
        assert_eq!(unmask("(555) 123-4567"), "5551234567");
        assert_eq!(unmask("a.b/c d"), "abcd");
        assert_eq!(unmask(""), "");
    }

    #[test]
    fn round_trip_invariant() {
        let patterns = ["(###) ###-####", "##-##", "AA-####", "NnNn"];
        let inputs = ["5551234567", "12ab", "(12) 34", "a-b-c", "", "!!!!"];
        for pat in patterns {
            let p = Pattern::new(pat);
            for input in inputs {
                let u = unmask(input);
                assert_eq!(
                    unmask(&p.mask(&u)),
                    p.normalize(input),
                    "unmask(mask(unmask(x))) must equal normalize(x) for {pat:?}/{input:?}",
                );
                // Normalizing twice changes nothing.
                assert_eq!(p.normalize(&p.normalize(input)), p.normalize(input));
            }
        }
    }

    #[test]
    fn masked_cursor_positions() {
        let p = Pattern::new("##-##");
        assert_eq!(p.masked_cursor(""), 0);
        assert_eq!(p.masked_cursor("1"), 1);
        assert_eq!(p.masked_cursor("12"), 3); // caret sits past the dash
        assert_eq!(p.masked_cursor("123"), 4);
        assert_eq!(p.masked_cursor("1234"), 5);
    }

    #[test]
    fn capacity_and_len() {
        let p = Pattern::new("(###) ###-####");
        assert_eq!(p.len(), 14);
        assert_eq!(p.capacity(), 10);
    }
}
