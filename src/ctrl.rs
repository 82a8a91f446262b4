/*!
Enums that control how a tokenizer reacts to bad input.
*/

/// Type for specifying a [`Tokenizer`](crate::Tokenizer)'s behavior upon
/// encountering a word that isn't valid UTF-8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Utf8FailureMode {
    /// Lossily convert to UTF-8 (with
    /// [`String::from_utf8_lossy`](std::string::String::from_utf8_lossy)).
    /// This is the default, since the benchmark input is assumed to be
    /// well-formed text.
    #[default]
    Lossy,
    /// Report an error from the `fill()` or `flush()` call that found the
    /// bad word, then ignore everything thereafter.
    Fatal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Utf8ErrorStatus {
    #[default]
    Lossy,
    Fatal,
    Errored,
}

impl Utf8ErrorStatus {
    /// Switch modes, but never un-halt a tokenizer that has already errored.
    pub(crate) fn with_mode(self, mode: Utf8FailureMode) -> Self {
        match (self, mode) {
            (Utf8ErrorStatus::Errored, _) => Utf8ErrorStatus::Errored,
            (_, Utf8FailureMode::Lossy) => Utf8ErrorStatus::Lossy,
            (_, Utf8FailureMode::Fatal) => Utf8ErrorStatus::Fatal,
        }
    }
}
