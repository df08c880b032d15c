#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// One line of input, without its line terminator.
    LineRead(String),
    /// The input stream closed cleanly.
    EndOfStream,
    /// The input stream failed before reaching its end.
    ReadFailed,
}
