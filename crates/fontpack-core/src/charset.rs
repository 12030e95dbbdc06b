//! Character selection: code-point lists/ranges or literal strings.

use crate::error::CharsetError;

/// Ordered list of characters to convert.
///
/// Order is the input order, not code-point order; the packed table keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Parse a list such as `"65, 66, 67"`, `"32-127"` or
    /// `"0x30-0x39, 0x41-0x5a"`.
    pub fn parse_ranges(text: &str) -> Result<Self, CharsetError> {
        let mut chars = Vec::new();
        for item in text.split(',') {
            let (lo, hi) = match item.split_once('-') {
                Some((lo, hi)) => (parse_code(lo)?, parse_code(hi)?),
                None => {
                    let code = parse_code(item)?;
                    (code, code)
                }
            };
            if lo > hi {
                return Err(CharsetError::ReversedRange { lo, hi });
            }
            for code in lo..=hi {
                chars.push(char::from_u32(code).ok_or(CharsetError::InvalidCodePoint(code))?);
            }
        }
        Self::from_chars(chars)
    }

    /// Take every character of `text`, in order.
    pub fn from_string(text: &str) -> Result<Self, CharsetError> {
        Self::from_chars(text.chars().collect())
    }

    pub fn from_chars(chars: Vec<char>) -> Result<Self, CharsetError> {
        if chars.is_empty() {
            return Err(CharsetError::Empty);
        }
        Ok(Self { chars })
    }

    /// Build a set from exactly one of the two selection modes.
    pub fn from_selection(
        codes: Option<&str>,
        string: Option<&str>,
    ) -> Result<Self, CharsetError> {
        match (codes, string) {
            (Some(codes), None) => Self::parse_ranges(codes),
            (None, Some(string)) => Self::from_string(string),
            (Some(_), Some(_)) => Err(CharsetError::SelectionConflict),
            (None, None) => Err(CharsetError::NoSelection),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// First character; also the table's default character.
    pub fn first(&self) -> char {
        self.chars[0]
    }

    /// The first position where code points stop forming an ascending
    /// gap-free run, as the code point before the gap.
    pub fn first_gap(&self) -> Option<u32> {
        self.chars
            .windows(2)
            .find(|pair| pair[1] as u32 != pair[0] as u32 + 1)
            .map(|pair| pair[0] as u32)
    }

    /// True if `code - firstchar` indexes the table directly.
    pub fn is_contiguous(&self) -> bool {
        self.first_gap().is_none()
    }

    /// Fail with [`CharsetError::NotContiguous`] on any gap.
    pub fn require_contiguous(&self) -> Result<(), CharsetError> {
        match self.first_gap() {
            Some(after) => Err(CharsetError::NotContiguous { after }),
            None => Ok(()),
        }
    }

    /// The selection as a string, in table order.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

fn parse_code(token: &str) -> Result<u32, CharsetError> {
    let token = token.trim();
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => token.parse::<u32>(),
    };
    parsed.map_err(|_| CharsetError::InvalidNumber(token.to_string()))
}
