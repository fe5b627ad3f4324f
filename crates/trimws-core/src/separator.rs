// crates/trimws-core/src/separator.rs
//
// Line-separator classification: requested output mode -> literal terminator.

pub const LF: &str = "\n";
pub const CR: &str = "\r";
pub const CRLF: &str = "\r\n";

/// Output line-separator policy as requested on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeparatorMode {
    /// Reuse whichever terminator each input line had.
    #[default]
    Preserve,
    Unix,
    Mac,
    Dos,
    /// The host's conventional sequence, supplied by the caller.
    Local,
}

/// What the engine appends after a finished line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Separator {
    Preserve,
    Fixed(String),
}

impl Separator {
    /// Sequence to emit for a line whose observed terminator was `observed`.
    pub fn for_line<'a>(&'a self, observed: &'a str) -> &'a str {
        match self {
            Separator::Preserve => observed,
            Separator::Fixed(s) => s.as_str(),
        }
    }
}

pub fn terminator(mode: SeparatorMode, local_default: &str) -> Separator {
    match mode {
        SeparatorMode::Preserve => Separator::Preserve,
        SeparatorMode::Unix => Separator::Fixed(LF.to_string()),
        SeparatorMode::Mac => Separator::Fixed(CR.to_string()),
        SeparatorMode::Dos => Separator::Fixed(CRLF.to_string()),
        SeparatorMode::Local => Separator::Fixed(local_default.to_string()),
    }
}

/// Host line separator. Only the CLI layer should call this; the engine takes
/// the result through `Config`.
pub fn host_default() -> &'static str {
    if cfg!(windows) {
        CRLF
    } else {
        LF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_modes_map_to_literals() {
        assert_eq!(terminator(SeparatorMode::Unix, CRLF), Separator::Fixed("\n".into()));
        assert_eq!(terminator(SeparatorMode::Mac, CRLF), Separator::Fixed("\r".into()));
        assert_eq!(terminator(SeparatorMode::Dos, LF), Separator::Fixed("\r\n".into()));
    }

    #[test]
    fn local_mode_uses_supplied_sequence() {
        assert_eq!(
            terminator(SeparatorMode::Local, "\r\n"),
            Separator::Fixed("\r\n".into())
        );
        assert_eq!(terminator(SeparatorMode::Local, "\n"), Separator::Fixed("\n".into()));
    }

    #[test]
    fn preserve_defers_to_observed() {
        let sep = terminator(SeparatorMode::Preserve, LF);
        assert_eq!(sep.for_line(CR), CR);
        assert_eq!(sep.for_line(CRLF), CRLF);
    }
}
