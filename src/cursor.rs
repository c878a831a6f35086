//! Token cursor over delimiter-split class fragments
//!
//! Parts, value streams and selector instructions are all flat token lists. The
//! cursor keeps the position explicit so argument consumption and sentinel
//! scanning can be tested without going through the whole parser.

#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: Vec<&'a str>,
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Self { tokens, position: 0 }
    }

    /// Split `input` on `separator`. An empty input yields an empty cursor.
    pub fn split(input: &'a str, separator: char) -> Self {
        if input.is_empty() {
            return Self::new(Vec::new());
        }
        Self::new(input.split(separator).collect())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Consume up to `count` tokens.
    pub fn take(&mut self, count: usize) -> Vec<&'a str> {
        let end = (self.position + count).min(self.tokens.len());
        let taken = self.tokens[self.position..end].to_vec();
        self.position = end;
        taken
    }

    /// Consume everything that is left.
    pub fn take_rest(&mut self) -> Vec<&'a str> {
        let remaining = self.remaining();
        self.take(remaining)
    }

    /// Offset (relative to the current position) of the first token equal to `sentinel`.
    pub fn find(&self, sentinel: &str) -> Option<usize> {
        self.tokens[self.position.min(self.tokens.len())..]
            .iter()
            .position(|token| *token == sentinel)
    }

    /// Consume tokens up to and including `sentinel`, or the rest when it never appears.
    /// The flag reports whether the sentinel was found.
    pub fn take_through(&mut self, sentinel: &str) -> (Vec<&'a str>, bool) {
        match self.find(sentinel) {
            Some(offset) => (self.take(offset + 1), true),
            None => (self.take_rest(), false),
        }
    }

    /// Consume a name that spans one or more tokens. The first token is always
    /// taken; later tokens are taken until `is_reserved` matches one.
    pub fn take_name(&mut self, is_reserved: impl Fn(&str) -> bool) -> Vec<&'a str> {
        let mut name = Vec::new();
        if let Some(first) = self.next_token() {
            name.push(first);
        }
        while let Some(token) = self.peek() {
            if is_reserved(token) {
                break;
            }
            name.push(token);
            self.position += 1;
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty_input() {
        let cursor = TokenCursor::split("", '_');
        assert!(cursor.is_empty());
        assert!(cursor.is_done());
    }

    #[test]
    fn test_take_stops_at_end() {
        let mut cursor = TokenCursor::split("a_b_c", '_');
        cursor.next_token();
        assert_eq!(cursor.take(5), vec!["b", "c"]);
        assert!(cursor.is_done());
    }

    #[test]
    fn test_take_through_sentinel() {
        let mut cursor = TokenCursor::split("fn-calc_100p_chr-slash_2_close_auto", '_');
        cursor.next_token();
        let (taken, found) = cursor.take_through("close");
        assert!(found);
        assert_eq!(taken, vec!["100p", "chr-slash", "2", "close"]);
        assert_eq!(cursor.peek(), Some("auto"));
    }

    #[test]
    fn test_take_through_without_sentinel_consumes_rest() {
        let mut cursor = TokenCursor::split("fn-min_1px_2px", '_');
        cursor.next_token();
        let (taken, found) = cursor.take_through("close");
        assert!(!found);
        assert_eq!(taken, vec!["1px", "2px"]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_take_name_spans_until_reserved() {
        let mut cursor = TokenCursor::split("main-nav-pc-hover", '-');
        let name = cursor.take_name(|t| t == "pc");
        assert_eq!(name, vec!["main", "nav"]);
        assert_eq!(cursor.next_token(), Some("pc"));
    }

    #[test]
    fn test_take_name_always_takes_first() {
        let mut cursor = TokenCursor::split("pc-x", '-');
        let name = cursor.take_name(|t| t == "pc" || t == "x");
        assert_eq!(name, vec!["pc"]);
    }
}
