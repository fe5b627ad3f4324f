// crates/trimws-core/src/engine/state.rs

/// Line-ending recognizer state.
///
/// `SawCr` means the previous character was a CR whose role is not known
/// yet: it either ends a line on its own or opens a CR+LF pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineState {
    #[default]
    Normal,
    SawCr,
}

/// Run totals reported back to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Trailing whitespace characters found (removed, or copied in copy mode).
    pub trimmed: u64,
    /// Stray control codes found (dropped under `clean`, else copied).
    pub control: u64,
}

/// Space, tab and ideographic space. The only characters counted as
/// trailing whitespace.
pub fn is_blank(c: char) -> bool {
    matches!(c, '\t' | ' ' | '\u{3000}')
}

/// DEL/NUL padding that old terminals inserted between CR and LF.
pub fn is_filler(c: char) -> bool {
    matches!(c, '\u{7f}' | '\0')
}
