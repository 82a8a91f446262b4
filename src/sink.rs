/*!
The trait used for types that observe the words a tokenizer finds.
*/
/**
Trait implemented by anything that wants to be told about each word a
[`Tokenizer`](crate::Tokenizer) emits.

Words are delivered synchronously, in the order they're found, before the
`fill()` or `flush()` call that found them returns. Any `FnMut(&str)`
closure is a `WordSink`, as is the [`FrequencyTable`](crate::FrequencyTable).
To register more than one observer, combine them with [`Tee`].
*/
pub trait WordSink {
    fn word(&mut self, word: &str);
}

impl<F> WordSink for F
where
    F: FnMut(&str),
{
    fn word(&mut self, word: &str) {
        self(word)
    }
}

/**
Hands every word to two sinks, first `.0` then `.1`. Nest them to fan out
further.

```
use wordfreq::{FrequencyTable, Tee, Tokenizer};

let mut lengths: Vec<usize> = Vec::new();
let sink = Tee(FrequencyTable::new(), |w: &str| lengths.push(w.len()));
let mut t = Tokenizer::new(sink).unwrap();
t.fill(b"to be or not to be").unwrap();
t.flush().unwrap();

let Tee(table, _) = t.into_sink();
assert_eq!(table.distinct_count(), 4);
assert_eq!(lengths, vec![2, 2, 2, 3, 2, 2]);
```
*/
#[derive(Clone, Debug, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: WordSink, B: WordSink> WordSink for Tee<A, B> {
    fn word(&mut self, word: &str) {
        self.0.word(word);
        self.1.word(word);
    }
}

/// A sink that just counts how many words it has seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordCounter {
    pub words: u64,
}

impl WordSink for WordCounter {
    fn word(&mut self, _: &str) {
        self.words += 1;
    }
}

impl WordSink for &mut WordCounter {
    fn word(&mut self, _: &str) {
        self.words += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tee_preserves_order() {
        let mut a: Vec<String> = Vec::new();
        let mut b: Vec<String> = Vec::new();
        {
            let mut tee = Tee(|w: &str| a.push(w.to_owned()), |w: &str| b.push(w.to_uppercase()));
            tee.word("one");
            tee.word("two");
        }
        assert_eq!(a, vec!["one", "two"]);
        assert_eq!(b, vec!["ONE", "TWO"]);
    }

    #[test]
    fn borrowed_counter() {
        let mut c = WordCounter::default();
        {
            let mut t = crate::Tokenizer::new(Tee(&mut c, |_: &str| {})).unwrap();
            t.fill(b"a  b ").unwrap();
            t.flush().unwrap();
        }
        assert_eq!(c.words, 3);
    }

    #[test]
    fn counter_counts_empty_words() {
        let mut c = WordCounter::default();
        c.word("");
        c.word("x");
        assert_eq!(c.words, 2);
    }
}
