use crate::utils::error::Result;

/// Terminal port: blocking, line-oriented console I/O.
///
/// The shop never touches stdin/stdout directly; every stage talks to this
/// trait so tests can drive the dialogue with a scripted console.
pub trait Console {
    /// Prints `text` without a trailing newline, flushes, and blocks for one
    /// line of input. The returned line has its terminator stripped and is
    /// otherwise untouched (keyword comparisons are case-sensitive and
    /// whitespace-sensitive).
    fn prompt(&mut self, text: &str) -> Result<String>;

    /// Prints `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()>;
}
