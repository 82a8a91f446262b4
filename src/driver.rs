/*!
Feeding a byte source through a [`Tokenizer`] and timing the result.
*/
use std::{
    fmt::{Display, Formatter},
    fs::File,
    hint::spin_loop,
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use log::{debug, trace};

use crate::{FrequencyTable, Tokenizer, WfErr, WfResult, CHUNK_SIZE, INPUT_PATH};

/**
Read `source` in chunks of at most `chunk_size` bytes, tokenize everything,
and return the filled [`FrequencyTable`].

Reads that fail with [`ErrorKind::Interrupted`] or
[`ErrorKind::WouldBlock`] are retried; any other read error ends the run.

```
use std::io::Cursor;
use wordfreq::count_reader;

# fn main() -> Result<(), wordfreq::WfErr> {
let table = count_reader(Cursor::new("to be or not to be"), 4)?;
assert_eq!(table.distinct_count(), 4);
assert_eq!(table.total_count(), 6);
# Ok(())
# }
```
*/
pub fn count_reader<R: Read>(mut source: R, chunk_size: usize) -> WfResult<FrequencyTable> {
    if chunk_size == 0 {
        return Err(WfErr::ChunkSize);
    }

    let mut read_buff = vec![0u8; chunk_size];
    let mut tokenizer = Tokenizer::new(FrequencyTable::new())?;
    let mut n_chunks: u64 = 0;
    let mut n_bytes: u64 = 0;

    loop {
        match source.read(&mut read_buff) {
            Err(e) => match e.kind() {
                ErrorKind::WouldBlock | ErrorKind::Interrupted => {
                    spin_loop();
                    continue;
                }
                _ => return Err(e.into()),
            },
            Ok(0) => break,
            Ok(n) => {
                tokenizer.fill(&read_buff[..n])?;
                n_chunks += 1;
                n_bytes += n as u64;
                trace!("chunk {}: {} bytes", n_chunks, n);
            }
        }
    }
    tokenizer.flush()?;

    debug!("read {} bytes in {} chunks", n_bytes, n_chunks);
    Ok(tokenizer.into_sink())
}

/// The three numbers a benchmark run reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub distinct: usize,
    pub total: u64,
    pub elapsed: Duration,
}

/// One line each: distinct words, total words, elapsed seconds.
impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.distinct)?;
        writeln!(f, "{}", self.total)?;
        write!(f, "{:.6}", self.elapsed.as_secs_f64())
    }
}

/**
A single timed run over one input file.

```no_run
use wordfreq::Benchmark;

# fn main() -> Result<(), wordfreq::WfErr> {
let report = Benchmark::default().run()?;
println!("{}", &report);
# Ok(())
# }
```
*/
#[derive(Clone, Debug)]
pub struct Benchmark {
    path: PathBuf,
    chunk_size: usize,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new(INPUT_PATH)
    }
}

impl Benchmark {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            chunk_size: CHUNK_SIZE,
        }
    }

    /**
    Builder-pattern method for setting the read size.
    Default size is [`CHUNK_SIZE`] bytes.
    */
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file, count its words, and report how long that took.
    /// A file that can't be opened is an immediate error.
    pub fn run(&self) -> WfResult<Report> {
        debug!(
            "counting words in {} ({} byte chunks)",
            self.path.display(),
            self.chunk_size
        );
        let start = Instant::now();

        let f = File::open(&self.path).map_err(|e| WfErr::open(&self.path, e))?;
        let table = count_reader(f, self.chunk_size)?;

        let report = Report {
            distinct: table.distinct_count(),
            total: table.total_count(),
            elapsed: start.elapsed(),
        };
        debug!("finished in {:?}", report.elapsed);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{initialize_for_tests, temp_file};

    use std::io::{self, Cursor};

    static TEXT: &str = "the cat  sat on the mat and the dog sat on the log\n";

    /// Returns `Interrupted` every other call, and at most 3 bytes at a time.
    struct Stuttering<R> {
        inner: R,
        hiccup: bool,
    }

    impl<R: Read> Read for Stuttering<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.hiccup = !self.hiccup;
            if self.hiccup {
                return Err(io::Error::new(ErrorKind::Interrupted, "hiccup"));
            }
            let n = buf.len().min(3);
            self.inner.read(&mut buf[..n])
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "nope"))
        }
    }

    #[test]
    fn chunk_size_does_not_matter() {
        let whole = count_reader(Cursor::new(TEXT), CHUNK_SIZE).unwrap();
        // the, cat, "", sat, on, mat, and, dog, log\n
        assert_eq!(whole.distinct_count(), 9);
        assert_eq!(whole.total_count(), 14);
        assert_eq!(whole.count("the"), Some(4));
        assert_eq!(whole.count("log\n"), Some(1));

        for size in 1..=TEXT.len() + 1 {
            let t = count_reader(Cursor::new(TEXT), size).unwrap();
            assert_eq!(t.distinct_count(), whole.distinct_count(), "size {}", size);
            assert_eq!(t.total_count(), whole.total_count(), "size {}", size);
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let src = Stuttering {
            inner: Cursor::new(TEXT),
            hiccup: false,
        };
        let t = count_reader(src, 16).unwrap();
        assert_eq!(t.total_count(), 14);
    }

    #[test]
    fn read_errors_propagate() {
        assert!(matches!(count_reader(Broken, 16), Err(WfErr::Read(_))));
    }

    #[test]
    fn zero_chunk_size() {
        assert!(matches!(
            count_reader(Cursor::new(TEXT), 0),
            Err(WfErr::ChunkSize)
        ));
    }

    #[test]
    fn empty_input() {
        let t = count_reader(Cursor::new(""), 8).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.total_count(), 0);
    }

    #[test]
    fn run_over_file() {
        initialize_for_tests();
        let path = temp_file("run_over_file", TEXT.as_bytes());
        let report = Benchmark::new(&path).with_chunk_size(5).run().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(report.distinct, 9);
        assert_eq!(report.total, 14);
        let printed = report.to_string();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "9");
        assert_eq!(lines[1], "14");
        assert!(lines[2].parse::<f64>().is_ok(), "{}", lines[2]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let path = std::env::temp_dir().join("wordfreq-definitely-not-here.txt");
        match Benchmark::new(&path).run() {
            Err(WfErr::Open { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            x => panic!("expected an open error, got {:?}", x),
        }
    }

    #[test]
    fn defaults() {
        let b = Benchmark::default();
        assert_eq!(b.path(), Path::new(INPUT_PATH));
        assert_eq!(b.chunk_size, CHUNK_SIZE);
    }
}
