/*!
Asynchronous analog to the [`Tokenizer`](crate::Tokenizer) that wraps
[Tokio](https://tokio.rs/)'s
[`AsyncRead`](https://docs.rs/tokio/latest/tokio/io/trait.AsyncRead.html)
types and implements
[`Stream`](https://docs.rs/futures/latest/futures/stream/trait.Stream.html).
*/
use std::{
    pin::Pin,
    task::{Context, Poll},
};

use bytes::{Buf, BytesMut};
use log::debug;
use regex::bytes::Regex;
use tokio::io::AsyncRead;
use tokio_stream::{Stream, StreamExt};
use tokio_util::codec::{Decoder, FramedRead};

use crate::{
    tokenizer::{fence, is_blank},
    FrequencyTable, WfErr, WfResult, DELIMITER,
};

struct WordDecoder {
    fence: Regex,
    /* Bytes of `src` before this offset were already searched by an
    earlier call to `decode()` and hold no delimiter. */
    scan_offset: usize,
}

impl WordDecoder {
    fn new(delimiter: u8) -> WfResult<Self> {
        Ok(Self {
            fence: fence(delimiter)?,
            scan_offset: 0,
        })
    }
}

impl Decoder for WordDecoder {
    type Item = String;
    type Error = WfErr;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let (start, end) = match self.fence.find_at(src.as_ref(), self.scan_offset) {
            Some(m) => (m.start(), m.end()),
            None => {
                self.scan_offset = src.len();
                return Ok(None);
            }
        };

        let word = src.split_to(start);
        src.advance(end - start);
        self.scan_offset = 0;
        Ok(Some(String::from_utf8_lossy(&word).into_owned()))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(w) = self.decode(src)? {
            return Ok(Some(w));
        }

        let rest = src.split();
        self.scan_offset = 0;
        let w = String::from_utf8_lossy(&rest);
        if is_blank(&w) {
            Ok(None)
        } else {
            Ok(Some(w.into_owned()))
        }
    }
}

/**
The `stream::WordStream` is the `async` analog of feeding a reader through
a [`Tokenizer`](crate::Tokenizer). It yields exactly the words the
synchronous tokenizer would, including empty words between adjacent
delimiters, decoding each one lossily.
*/
pub struct WordStream<A: AsyncRead> {
    freader: FramedRead<A, WordDecoder>,
}

impl<A: AsyncRead> WordStream<A> {
    /// Return a new [`WordStream`] that splits `source` on spaces.
    pub fn new(source: A) -> WfResult<Self> {
        Self::with_delimiter(source, DELIMITER)
    }

    /// Return a new [`WordStream`] that splits `source` on some other
    /// ASCII byte.
    pub fn with_delimiter(source: A, delimiter: u8) -> WfResult<Self> {
        let freader = FramedRead::new(source, WordDecoder::new(delimiter)?);
        Ok(Self { freader })
    }

    /// Builder-pattern method for setting the initial read buffer capacity.
    /// Call it before polling; anything already buffered is discarded.
    pub fn with_buffer_size(self, size: usize) -> Self {
        let parts = self.freader.into_parts();
        Self {
            freader: FramedRead::with_capacity(parts.io, parts.codec, size),
        }
    }

    /// Consumes the [`WordStream`] and returns its wrapped reader.
    pub fn into_inner(self) -> A {
        self.freader.into_inner()
    }
}

impl<A: AsyncRead + Unpin> Stream for WordStream<A> {
    type Item = WfResult<String>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.freader).poll_next(cx)
    }
}

/// Count the words in `source` asynchronously.
pub async fn count_async<A: AsyncRead + Unpin>(source: A) -> WfResult<FrequencyTable> {
    let mut words = WordStream::new(source)?;
    let mut table = FrequencyTable::new();
    while let Some(w) = words.next().await {
        table.increment(&w?);
    }
    debug!(
        "async count: {} distinct, {} total",
        table.distinct_count(),
        table.total_count()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{reference_split, temp_file, tokenize_chunks};

    use tokio::{fs::File, io::AsyncWriteExt};

    static TEXT: &str = "one two  three é日本 ünï \nlast\n";

    #[tokio::test]
    async fn matches_sync_tokenizer() {
        let words: Vec<String> = WordStream::new(TEXT.as_bytes())
            .unwrap()
            .map(|res| res.unwrap())
            .collect()
            .await;
        assert_eq!(words, tokenize_chunks(&[TEXT.as_bytes()]));
        assert_eq!(words, reference_split(TEXT.as_bytes(), b' '));
    }

    #[tokio::test]
    async fn tiny_reads() {
        // A duplex pipe with a 1-byte buffer forces every read to be tiny.
        let (mut tx, rx) = tokio::io::duplex(1);
        let writer = async move {
            tx.write_all(TEXT.as_bytes()).await.unwrap();
            tx.shutdown().await.unwrap();
        };
        let reader = async {
            WordStream::new(rx)
                .unwrap()
                .with_buffer_size(1)
                .map(|res| res.unwrap())
                .collect::<Vec<String>>()
                .await
        };
        let ((), words) = tokio::join!(writer, reader);
        assert_eq!(words, reference_split(TEXT.as_bytes(), b' '));
    }

    #[tokio::test]
    async fn blank_tail_is_dropped() {
        let words: Vec<String> = WordStream::new(&b"a b \n"[..])
            .unwrap()
            .map(|res| res.unwrap())
            .collect()
            .await;
        assert_eq!(words, ["a", "b"]);
    }

    #[tokio::test]
    async fn count_file() {
        let path = temp_file("count_file_async", TEXT.as_bytes());
        let f = File::open(&path).await.unwrap();
        let table = count_async(f).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        let expected = reference_split(TEXT.as_bytes(), b' ');
        assert_eq!(table.total_count(), expected.len() as u64);
        assert_eq!(table.count(""), Some(1));
    }

    #[test]
    fn rejects_non_ascii_delimiter() {
        assert!(matches!(
            WordStream::with_delimiter(&b""[..], 0x80),
            Err(WfErr::Delimiter(0x80))
        ));
    }
}
