/*!
The incremental, delimiter-splitting [`Tokenizer`].
*/
use std::{
    borrow::Cow,
    fmt::{Debug, Formatter},
};

use regex::bytes::Regex;
use log::trace;

use crate::{ctrl::*, WfResult, WfErr, WordSink, DELIMITER};

/**
The `Tokenizer` takes chunks of raw bytes, in order, and hands every
complete word it finds to a [`WordSink`]. It behaves exactly like splitting
the whole stream on the delimiter at once, no matter where the chunk
boundaries fall:

```
use wordfreq::Tokenizer;

# fn main() -> Result<(), wordfreq::WfErr> {
let mut words: Vec<String> = Vec::new();
let mut t = Tokenizer::new(|w: &str| words.push(w.to_owned()))?;

t.fill(b"hello wor")?;
t.fill(b"ld foo")?;
t.flush()?;
drop(t);

assert_eq!(&words, &["hello", "world", "foo"]);
# Ok(())
# }
```

Adjacent delimiters produce an empty word, just as a literal split
would. The trailing fragment left at the end of the stream is only emitted
by [`Tokenizer::flush`], and only if it isn't entirely whitespace.

Delimiters are searched for in the raw bytes and each word is decoded as
UTF-8 when it is emitted. Because the delimiter is always a single ASCII
byte, it can never occur inside a multi-byte character, so a chunk boundary
that cuts a character in half just leaves the first half pending until the
rest arrives.
*/
pub struct Tokenizer<S> {
    sink: S,
    fence: Regex,
    delimiter: u8,
    pending: Vec<u8>,
    utf8_status: Utf8ErrorStatus,
    /* Everything in `pending` before this offset has already been searched
    and contains no delimiter, so the next `fill()` starts looking here
    instead of at the front of the unfinished word. */
    scan_start_offset: usize,
}

/// A search for exactly one ASCII byte.
pub(crate) fn fence(delimiter: u8) -> WfResult<Regex> {
    if !delimiter.is_ascii() {
        return Err(WfErr::Delimiter(delimiter));
    }
    Ok(Regex::new(&format!(r"\x{:02X}", delimiter))?)
}

/*
Decode one word according to the current failure mode. Returns `None` if
the tokenizer has already halted on bad UTF-8.
*/
fn decode<'a>(status: &mut Utf8ErrorStatus, word: &'a [u8]) -> WfResult<Option<Cow<'a, str>>> {
    match *status {
        Utf8ErrorStatus::Errored => Ok(None),
        Utf8ErrorStatus::Lossy => Ok(Some(String::from_utf8_lossy(word))),
        Utf8ErrorStatus::Fatal => match std::str::from_utf8(word) {
            Ok(s) => Ok(Some(Cow::Borrowed(s))),
            Err(e) => {
                *status = Utf8ErrorStatus::Errored;
                Err(e.into())
            }
        },
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

impl<S: WordSink> Tokenizer<S> {
    /**
    Return a new [`Tokenizer`] that splits on spaces and reports each word
    to `sink`.
    */
    pub fn new(sink: S) -> WfResult<Self> {
        Ok(Self {
            sink,
            fence: fence(DELIMITER)?,
            delimiter: DELIMITER,
            pending: Vec::new(),
            utf8_status: Utf8ErrorStatus::default(),
            scan_start_offset: 0,
        })
    }

    /**
    Builder-pattern method for splitting on some byte other than a space.
    The delimiter has to be ASCII.
    */
    pub fn with_delimiter(mut self, delimiter: u8) -> WfResult<Self> {
        self.fence = fence(delimiter)?;
        self.delimiter = delimiter;
        // Whatever is pending was searched for the old delimiter.
        self.scan_start_offset = 0;
        Ok(self)
    }

    /**
    Builder-pattern method for controlling how the tokenizer responds when
    a word isn't valid UTF-8. The default value is
    [`Utf8FailureMode::Lossy`].
    */
    pub fn on_utf8_error(mut self, mode: Utf8FailureMode) -> Self {
        self.utf8_status = self.utf8_status.with_mode(mode);
        self
    }

    /**
    Append `chunk` to the pending text and emit every word that is now
    complete. Whatever follows the last delimiter stays pending.

    Only fails under [`Utf8FailureMode::Fatal`]; once it has, the tokenizer
    ignores all further input.
    */
    pub fn fill(&mut self, chunk: &[u8]) -> WfResult<()> {
        if self.utf8_status == Utf8ErrorStatus::Errored {
            return Ok(());
        }
        self.pending.extend_from_slice(chunk);

        let mut left = 0;
        let mut scan = self.scan_start_offset;
        while let Some(m) = self.fence.find_at(&self.pending, scan) {
            let word = &self.pending[left..m.start()];
            match decode(&mut self.utf8_status, word) {
                Ok(Some(w)) => self.sink.word(&w),
                Ok(None) => {}
                Err(e) => {
                    self.pending.clear();
                    self.scan_start_offset = 0;
                    return Err(e);
                }
            }
            left = m.end();
            scan = left;
        }

        // Only the bytes this call searched; earlier ones were checked then.
        debug_assert!(!self.pending[scan..].contains(&self.delimiter));
        if left > 0 {
            self.pending.drain(..left);
        }
        self.scan_start_offset = self.pending.len();

        trace!(
            "filled {} bytes, consumed {}, {} pending",
            chunk.len(),
            left,
            self.pending.len()
        );
        Ok(())
    }

    /**
    Signal the end of the stream: emit the pending fragment as the final
    word unless it's empty or all whitespace. The pending buffer is cleared,
    so flushing twice emits nothing the second time.
    */
    pub fn flush(&mut self) -> WfResult<()> {
        let rest = std::mem::take(&mut self.pending);
        self.scan_start_offset = 0;
        if rest.is_empty() {
            return Ok(());
        }

        if let Some(w) = decode(&mut self.utf8_status, &rest)? {
            if !is_blank(&w) {
                self.sink.word(&w);
            }
        }
        Ok(())
    }
}

impl<S> Tokenizer<S> {
    /// Bytes received but not yet emitted as part of a word.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// The byte this tokenizer splits on.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Get a reference to the [`WordSink`].
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the [`WordSink`].
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /**
    Consumes the [`Tokenizer`] and returns its [`WordSink`]. Any pending
    text is lost; call [`Tokenizer::flush`] first, or use
    [`Tokenizer::into_innards`] to get it back.
    */
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Consumes the [`Tokenizer`] and returns its [`WordSink`] along with
    /// any bytes that haven't been emitted yet.
    pub fn into_innards(self) -> (S, Vec<u8>) {
        (self.sink, self.pending)
    }
}

impl<S> Debug for Tokenizer<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("sink", &std::any::type_name::<S>())
            .field("fence", &self.fence)
            .field("pending", &String::from_utf8_lossy(&self.pending))
            .field("utf8_status", &self.utf8_status)
            .field("scan_start_offset", &self.scan_start_offset)
            .finish()
    }
}
