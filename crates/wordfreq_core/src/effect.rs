use crate::RankedEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Startup banner and instructions.
    Banner,
    /// Prompt marker before blocking on the next line.
    Prompt,
    /// The submitted line was blank; nothing was counted.
    EmptyInputNotice,
    /// Ranked result for one line. Empty when no words were found.
    Report(Vec<RankedEntry>),
}
