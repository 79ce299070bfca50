use std::fmt;
use std::sync::Arc;

use crate::logging::Loggable;
use crate::util;

/// An immutable position in a string.
///
/// `position` is a byte offset, always on a char boundary and never past the end. Matching
/// returns a new cursor; the original is untouched. Clones share the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    input: Arc<str>,
    position: usize,
}

impl Cursor {
    pub fn new<S: Into<Arc<str>>>(input: S) -> Self {
        Self {
            input: input.into(),
            position: 0,
        }
    }

    /// A cursor `position` bytes into `input`, or `None` if that is past the end or inside a
    /// multi-byte char.
    pub fn try_at<S: Into<Arc<str>>>(input: S, position: usize) -> Option<Self> {
        let input = input.into();
        input
            .is_char_boundary(position)
            .then_some(Self { input, position })
    }

    /// A cursor `position` bytes (not chars) into `input`.
    ///
    /// # Panics
    ///
    /// If `position` is past the end of `input` or not on a char boundary. See [`Cursor::try_at`].
    pub fn at<S: Into<Arc<str>>>(input: S, position: usize) -> Self {
        let input = input.into();
        let len = input.len();
        match Self::try_at(input, position) {
            Some(cur) => cur,
            None => panic!(
                "cursor position {position} not a char boundary of input of length {len}"
            ),
        }
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed part of the input.
    #[inline]
    pub fn rest(&self) -> &str {
        &self.input[self.position..]
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn is_eos(&self) -> bool {
        self.position == self.input.len()
    }

    /// A new cursor `bytes` further on. Callers only step over whole chars.
    pub(crate) fn advance(&self, bytes: usize) -> Self {
        debug_assert!(self.input.is_char_boundary(self.position + bytes));
        Self {
            input: Arc::clone(&self.input),
            position: self.position + bytes,
        }
    }
}

impl From<&str> for Cursor {
    #[inline]
    fn from(s: &str) -> Self {
        let cur = Self::new(s);
        cur.log_inputs("Cursor::from", "");
        cur
    }
}

impl From<String> for Cursor {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{pos}:{rest}",
            pos = self.position,
            rest = util::formatter_str(self.rest()).trim_end()
        )
    }
}

impl Loggable for Cursor {
    fn snippet(&self) -> String {
        util::formatter_str(self.rest())
    }
}
