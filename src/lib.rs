#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
A streaming word-frequency counter, written as a throughput benchmark.

The centerpiece of this crate is the [`Tokenizer`], which is fed a byte
stream one chunk at a time, splits it on a single delimiter byte (a space,
by default), and hands each word to a [`WordSink`]. Words that straddle a
chunk boundary come out whole, so the result is the same as splitting the
entire stream at once. The [`FrequencyTable`] is the sink that tallies them.

The example below counts the words in a file the way the `wordfreq`
binary does, in 80 KiB chunks:

```no_run
use wordfreq::Benchmark;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let report = Benchmark::new("words.txt").run()?;
    println!("{}", &report);
    Ok(())
}
```

Driving a `Tokenizer` by hand looks like this:

```rust
use wordfreq::{FrequencyTable, Tokenizer};

# fn main() -> Result<(), wordfreq::WfErr> {
let mut t = Tokenizer::new(FrequencyTable::new())?;
t.fill(b"a rose is a r")?;
t.fill(b"ose is a  rose")?;
t.flush()?;

let table = t.into_sink();
// The doubled space produces one empty word.
assert_eq!(table.count("rose"), Some(3));
assert_eq!(table.count(""), Some(1));
assert_eq!(table.distinct_count(), 4);
assert_eq!(table.total_count(), 9);
# Ok(())
# }
```

Enabling the `async` feature also exposes the [`stream`] module, which
does the same splitting over a Tokio `AsyncRead` and yields the words as a
`Stream`.
*/

mod ctrl;
mod driver;
pub mod err;
mod freq;
pub mod logging;
mod sink;
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod stream;
mod tokenizer;

pub use crate::{
    ctrl::Utf8FailureMode,
    driver::{count_reader, Benchmark, Report},
    err::WfErr,
    freq::{FrequencyTable, Iter},
    sink::{Tee, WordCounter, WordSink},
    tokenizer::Tokenizer,
};

pub type WfResult<T> = Result<T, WfErr>;

/// Bytes requested from the input per read.
pub const CHUNK_SIZE: usize = 81920;

/// The byte words are split on.
pub const DELIMITER: u8 = b' ';

/// The file the benchmark reads, relative to the working directory.
pub const INPUT_PATH: &str = "words.txt";
