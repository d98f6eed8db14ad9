//! Copyable byte cursor over the source text.
//!
//! Reads past the end of the source return `0x00`, so byte-class predicates
//! terminate naturally at EOF. Interior null bytes also read as `0x00`;
//! [`Cursor::is_eof`] tells them apart by position.
//!
//! Rule patterns probe the input on a copy of the cursor and report how far
//! the copy advanced. The scanner then commits by advancing its own cursor.

/// Cursor over the bytes of a `&str`.
///
/// The cursor is [`Copy`], so a pattern can probe ahead and be discarded
/// without touching the scanner's position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    source_len: u32,
}

/// `&str` = 16 (fat pointer), two `u32` = 8.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Contract
    ///
    /// `source_len == src.len()`. The scanner checks that the length fits in
    /// `u32` before constructing a cursor.
    pub(crate) fn new(src: &'a str, source_len: u32) -> Self {
        debug_assert_eq!(src.len(), source_len as usize);
        Self {
            src,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead, `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte just before the current position, `None` at the start.
    #[inline]
    pub fn previous(&self) -> Option<u8> {
        self.pos
            .checked_sub(1)
            .map(|prev| self.byte_at(prev))
    }

    /// `true` if the bytes at the cursor begin with `lit`.
    #[inline]
    pub fn starts_with(&self, lit: &[u8]) -> bool {
        self.remaining().starts_with(lit)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source text between two offsets.
    ///
    /// # Contract
    ///
    /// Both offsets lie on character boundaries within the source. The
    /// scanner only produces such offsets: every pattern advances by whole
    /// UTF-8 characters or by ASCII bytes.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        &self.src[start as usize..end as usize]
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop runs to EOF and
    /// stops there.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if !self.is_eof() {
            let width = Self::utf8_char_width(self.current());
            self.pos = (self.pos + width).min(self.source_len);
        }
    }

    /// Source bytes from the current position to EOF.
    fn remaining(&self) -> &'a [u8] {
        self.src.as_bytes().get(self.pos as usize..).unwrap_or_default()
    }

    /// Advance to the next line terminator (`\n` or `\r`) or EOF.
    ///
    /// The terminator itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance over block comment text up to the next delimiter candidate.
    ///
    /// Stops before `:`, `}`, or a `{:` opener, or at EOF. A lone `{` is
    /// ordinary text and is consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_comment_text(&mut self) {
        loop {
            let Some(offset) = memchr::memchr3(b'{', b':', b'}', self.remaining()) else {
                self.pos = self.source_len;
                return;
            };
            self.pos += offset as u32;
            if self.current() == b'{' && self.peek() != b':' {
                self.pos += 1;
                continue;
            }
            return;
        }
    }
}
