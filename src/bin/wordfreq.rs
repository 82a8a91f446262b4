/*!
The benchmark itself: count the words in `words.txt`, then print the
number of distinct words, the total number of words, and the elapsed
seconds, one per line.

Set `WORDFREQ_LOG=debug` to see progress on stderr.
*/
use std::error::Error;

use log::error;
use wordfreq::{logging, Benchmark};

fn main() -> Result<(), Box<dyn Error>> {
    logging::initialize();

    let report = Benchmark::default()
        .run()
        .inspect_err(|e| error!("{}", e))?;
    println!("{}", &report);

    Ok(())
}
