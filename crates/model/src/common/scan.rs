//! Metadata text scanning.
//!
//! Tokenization and numeric parsing for the line-oriented metadata language.
//! Tokens are separated by whitespace; double-quoted tokens may contain
//! whitespace; `#` begins a comment that runs to the end of the line.

/// Scanner states for [`parse_line`].
enum ScanState {
    Whitespace,
    UnquotedToken,
    QuotedToken,
    Comment,
}

/// Parses a signed 64-bit value with C-style base prefixes.
///
/// `0x` selects base 16, `0b` base 2, any other leading `0` base 8, and
/// everything else base 10. Scanning is permissive in the manner of
/// `strtoull`: it stops at the first character that is not a digit of the
/// selected base, the empty digit string yields zero, and accumulation wraps
/// on overflow.
pub fn parse_value(text: &str) -> i64 {
    let value = if let Some(digits) = text.strip_prefix("0x") {
        scan_radix(digits, 16)
    } else if let Some(digits) = text.strip_prefix("0b") {
        scan_radix(digits, 2)
    } else if let Some(digits) = text.strip_prefix('0') {
        scan_radix(digits, 8)
    } else {
        scan_radix(text, 10)
    };
    value as i64
}

/// Accumulates digits of the given radix, stopping at the first non-digit.
pub(crate) fn scan_radix(digits: &str, radix: u32) -> u64 {
    let mut value: u64 = 0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value.wrapping_mul(u64::from(radix)).wrapping_add(u64::from(d)),
            None => break,
        }
    }
    value
}

/// Permissive base-10 scan used for bit positions inside ranges and masks.
pub(crate) fn scan_decimal(digits: &str) -> usize {
    scan_radix(digits, 10) as usize
}

/// Splits a line into tokens.
///
/// Three-state scanner: whitespace is skipped, `#` (seen between tokens)
/// discards the rest of the line, `"` opens a token that may contain
/// whitespace. The quotes themselves are not part of the token. A `#` inside
/// an unquoted token is kept; an unterminated quoted token is flushed at end
/// of line.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut state = ScanState::Whitespace;
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        match state {
            ScanState::Whitespace => {
                if c.is_whitespace() {
                    chars.next();
                } else if c == '#' {
                    state = ScanState::Comment;
                } else if c == '"' {
                    state = ScanState::QuotedToken;
                    chars.next();
                } else {
                    // re-read this character as the start of a token
                    state = ScanState::UnquotedToken;
                }
            }
            ScanState::UnquotedToken => {
                if c.is_whitespace() {
                    tokens.push(std::mem::take(&mut token));
                    state = ScanState::Whitespace;
                } else {
                    token.push(c);
                }
                chars.next();
            }
            ScanState::QuotedToken => {
                if c == '"' {
                    tokens.push(std::mem::take(&mut token));
                    state = ScanState::Whitespace;
                } else {
                    token.push(c);
                }
                chars.next();
            }
            ScanState::Comment => {
                chars.next();
            }
        }
    }
    if !token.is_empty() {
        tokens.push(token);
    }
    tokens
}
