use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("[{}:{}]", start, end)]
pub struct Span {
    // inclusive byte range
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn one(start: usize) -> Self {
        Span { start, end: start }
    }

    /// Span covering a single character that starts at `start`.
    pub fn char_at(start: usize, c: char) -> Self {
        Span {
            start,
            end: start + c.len_utf8() - 1,
        }
    }

    pub fn str_from_source<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.start..=self.end).unwrap_or("")
    }
}
