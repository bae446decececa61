//! I define [`Scanner`],
//! which implements the lexical logic common to N-Triples and Turtle.

use relbase_api::parser::{Location, ParseError};

/// A cursor in a text document, keeping track of lines and columns.
#[derive(Clone, Debug)]
pub(crate) struct Scanner<'a> {
    txt: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `txt`, after a byte order mark if any.
    pub fn new(txt: &'a str) -> Self {
        let pos = if txt.starts_with('\u{feff}') {
            '\u{feff}'.len_utf8()
        } else {
            0
        };
        Scanner {
            txt,
            pos,
            line: 1,
            line_start: pos,
        }
    }

    /// The text remaining after the cursor.
    pub fn rest(&self) -> &'a str {
        &self.txt[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.txt.len()
    }

    /// The location of the cursor, as line and column (both starting at 1).
    pub fn location(&self) -> Location {
        let col = self.txt[self.line_start..self.pos].chars().count() + 1;
        Location::from_lico(self.line, col)
    }

    /// Move the cursor `len` bytes forward.
    pub fn advance(&mut self, len: usize) {
        let end = (self.pos + len).min(self.txt.len());
        let consumed = &self.txt[self.pos..end];
        if let Some(last) = consumed.rfind('\n') {
            self.line += consumed.matches('\n').count();
            self.line_start = self.pos + last + 1;
        }
        self.pos = end;
    }

    /// If the remaining text starts with `token`, consume it and return `true`.
    pub fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.advance(token.len());
            true
        } else {
            false
        }
    }

    /// Consume `token`, or fail with an [`expected`](Scanner::expected) error.
    pub fn expect(&mut self, token: &str) -> Result<(), ParseError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.expected(&format!("'{token}'")))
        }
    }

    /// Build a syntax error at the cursor, stating what was expected.
    pub fn expected(&self, what: &str) -> ParseError {
        let found = match self.rest().chars().next() {
            None => "end of data".to_string(),
            Some('\n') | Some('\r') => "end of line".to_string(),
            Some(c) => format!("{c:?}"),
        };
        ParseError::syntax(format!("Expected {what}, found {found}"), self.location())
    }

    /// Build a syntax error at the cursor, for a construct outside the supported subset.
    pub fn unsupported(&self, what: &str) -> ParseError {
        ParseError::syntax(format!("{what} are not supported"), self.location())
    }

    /// Skip horizontal white spaces (N-Triples).
    pub fn hws(&mut self) {
        let len = self
            .rest()
            .bytes()
            .take_while(|b| *b == b' ' || *b == b'\t')
            .count();
        self.advance(len);
    }

    /// Indicate whether the end-of-line or a comment has been reached.
    pub fn eol(&self) -> bool {
        let rest = self.rest();
        rest.is_empty() || rest.starts_with(['\n', '\r', '#'])
    }

    /// Skip the rest of the current line, including its line terminator.
    pub fn skip_line(&mut self) {
        let len = match self.rest().find('\n') {
            Some(i) => i + 1,
            None => self.rest().len(),
        };
        self.advance(len);
    }

    /// Skip white spaces, including line breaks, and comments (Turtle).
    pub fn ws(&mut self) {
        lazy_regex!(WS = r"^[ \n\r\t]*");
        loop {
            let len = WS.find(self.rest()).map(|m| m.len()).unwrap_or(0);
            self.advance(len);
            if self.rest().starts_with('#') {
                self.skip_line();
            } else {
                break;
            }
        }
    }

    /// Handle the production <https://www.w3.org/TR/turtle/#grammar-production-IRIREF>
    /// (or the equivalent in N-Triples) assuming the leading '<'.
    ///
    /// Return the IRI reference with its numeric escape sequences decoded,
    /// and the location of its opening '<'.
    /// The content is *not* checked against the IRI grammar.
    pub fn iriref_raw(&mut self) -> Result<(String, Location), ParseError> {
        debug_assert!(self.rest().starts_with('<'));
        let location = self.location();
        let txt = self.rest();
        let txtb = txt.as_bytes();
        let mut buf = String::new();
        let mut i = 1;
        loop {
            match txt[i..].find(['\n', '\r', '\\', '>']).map(|x| x + i) {
                Some(j) if txtb[j] == b'\\' => {
                    buf.push_str(&txt[i..j]);
                    match unescape_numeric(&txt[j + 1..]) {
                        Some((chr, len)) => {
                            buf.push(chr);
                            i = j + 1 + len;
                        }
                        None => {
                            self.advance(j);
                            return Err(ParseError::syntax(
                                "Invalid escape sequence",
                                self.location(),
                            ));
                        }
                    }
                }
                Some(j) if txtb[j] == b'>' => {
                    buf.push_str(&txt[i..j]);
                    self.advance(j + 1);
                    return Ok((buf, location));
                }
                opt => {
                    self.advance(opt.unwrap_or(txt.len()));
                    return Err(self.expected("matching closing '>'"));
                }
            }
        }
    }
}

/// Decode `\uXXXX` or `\UXXXXXXXX`, `txt` starting after the backslash.
///
/// Return the decoded character and the number of bytes consumed.
fn unescape_numeric(txt: &str) -> Option<(char, usize)> {
    let len = match txt.as_bytes().first()? {
        b'u' => 4,
        b'U' => 8,
        _ => return None,
    };
    let hex = txt.get(1..=len)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let chr = char::from_u32(u32::from_str_radix(hex, 16).ok()?)?;
    Some((chr, len + 1))
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn location_tracks_lines_and_columns() {
        let mut s = Scanner::new("ab\ncdé\nf");
        assert_eq!(s.location(), Location::from_lico(1, 1));
        s.advance(2);
        assert_eq!(s.location(), Location::from_lico(1, 3));
        s.advance(1);
        assert_eq!(s.location(), Location::from_lico(2, 1));
        s.advance(4);
        assert_eq!(s.location(), Location::from_lico(2, 4));
        s.advance(1);
        assert_eq!(s.location(), Location::from_lico(3, 1));
        assert!(!s.is_eof());
        s.advance(10);
        assert!(s.is_eof());
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let mut s = Scanner::new("\u{feff}<x> .");
        assert_eq!(s.rest(), "<x> .");
        assert_eq!(s.location(), Location::from_lico(1, 1));
        s.advance(3);
        assert_eq!(s.location(), Location::from_lico(1, 4));
    }

    #[test]
    fn ws_skips_comments() {
        let mut s = Scanner::new("  # comment\n\t\n  # another\r\n <x>");
        s.ws();
        assert_eq!(s.rest(), "<x>");
        assert_eq!(s.location(), Location::from_lico(4, 2));
    }

    #[test]
    fn hws_stays_on_line() {
        let mut s = Scanner::new(" \t \n <x>");
        s.hws();
        assert!(s.eol());
        assert_eq!(s.rest(), "\n <x>");
        s.skip_line();
        assert_eq!(s.rest(), " <x>");
    }

    #[test_case("<foo.txt> .", "foo.txt", " ."; "plain")]
    #[test_case(r"<b\u00E0r> .", "bàr", " ."; "short escape")]
    #[test_case(r"<\U0001F600>", "\u{1F600}", ""; "long escape")]
    #[test_case("<>", "", ""; "empty")]
    fn iriref_raw(txt: &str, expected: &str, rest: &str) {
        let mut s = Scanner::new(txt);
        let (got, loc) = s.iriref_raw().unwrap();
        assert_eq!(got, expected);
        assert_eq!(loc, Location::from_lico(1, 1));
        assert_eq!(s.rest(), rest);
    }

    #[test_case("<foo.txt"; "eof")]
    #[test_case("<foo.txt\n>"; "newline")]
    #[test_case(r"<foo\x>"; "bad escape")]
    #[test_case(r"<foo\u00G0>"; "bad hex")]
    #[test_case(r"<foo\uD800>"; "surrogate")]
    fn iriref_raw_err(txt: &str) {
        let mut s = Scanner::new(txt);
        assert!(s.iriref_raw().is_err());
    }

    #[test]
    fn expected_message() {
        let mut s = Scanner::new("<a> <b>\n");
        s.advance(3);
        let err = s.expected("'.'");
        assert_eq!(err.to_string(), "Expected '.', found ' ' at 1:4");
        s.advance(4);
        let err = s.expected("'.'");
        assert_eq!(err.to_string(), "Expected '.', found end of line at 1:8");
    }
}
