/*!
Program that writes random space-separated words to the standard output,
for producing a `words.txt` to run the benchmark against.

```text
genwords [N_WORDS [VOCABULARY]]
```
*/

#[cfg(feature = "test")]
use std::{
    error::Error,
    io::{BufWriter, Write},
};
#[cfg(feature = "test")]
use log::info;
#[cfg(feature = "test")]
const DEFAULT_WORDS: usize = 1_000_000;
#[cfg(feature = "test")]
const DEFAULT_VOCABULARY: usize = 50_000;
#[cfg(feature = "test")]
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

// A fixed vocabulary of random lowercase words, drawn from uniformly.
#[cfg(feature = "test")]
struct Vocabulary {
    words: Vec<String>,
}
#[cfg(feature = "test")]
impl Vocabulary {
    fn new(size: usize, rng: &mut fastrand::Rng) -> Self {
        let words = (0..size.max(1))
            .map(|_| {
                let len = rng.usize(1..=12);
                (0..len)
                    .map(|_| char::from(LETTERS[rng.usize(..LETTERS.len())]))
                    .collect::<String>()
            })
            .collect();
        Self { words }
    }

    fn get(&self, rng: &mut fastrand::Rng) -> &str {
        &self.words[rng.usize(..self.words.len())]
    }
}
#[cfg(feature = "test")]
fn getopts() -> Result<(usize, usize), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let n_words = match args.get(1) {
        Some(s) => s.parse()?,
        None => DEFAULT_WORDS,
    };
    let vocab = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_VOCABULARY,
    };
    Ok((n_words, vocab))
}

#[cfg(feature = "test")]
fn main() -> Result<(), Box<dyn Error>> {
    wordfreq::logging::initialize();
    let (n_words, vocab_size) = getopts()?;

    let mut rng = fastrand::Rng::new();
    let vocab = Vocabulary::new(vocab_size, &mut rng);
    let mut out = BufWriter::new(std::io::stdout().lock());

    for i in 0..n_words {
        if i > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(vocab.get(&mut rng).as_bytes())?;
    }
    out.write_all(b"\n")?;
    out.flush()?;

    info!("wrote {} words from a vocabulary of {}", n_words, vocab_size);
    Ok(())
}

#[cfg(not(feature = "test"))]
fn main() {
    const MSG: &str =
r#"
The genwords binary must be built with feature "test" enabled.
Try re-running with `cargo build --features test`.
"#;
    println!("{}", MSG);
}
