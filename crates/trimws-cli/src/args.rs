// crates/trimws-cli/src/args.rs

use clap::{ArgGroup, Parser};
use trimws_core::SeparatorMode;

#[derive(Parser, Debug)]
#[command(name = "trimws", version)]
#[command(about = "Trim trailing spaces or tabs from text files")]
#[command(
    long_about = "Remove trailing white space (blanks, tabs, ideographic spaces) from the end \
of each line. CR, LF and CR/LF line separators are all recognized on input; the output \
separator is chosen with --same (default), --lf, --cr, --crlf or --local.\n\n\
The exit status is the number of white space characters removed (capped by the platform), \
or a failure status on errors."
)]
#[command(after_help = "Output goes to standard output when no output file is given.")]
#[command(group(
    ArgGroup::new("separator")
        .args(["same", "lf", "cr", "crlf", "local"])
        .multiple(false)
))]
pub struct Cli {
    /// Input file, then optional output file
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Do not copy unrecognized control codes to the output file
    #[arg(long)]
    pub clean: bool,

    /// Character set for both input and output (default UTF-8)
    #[arg(long, value_name = "NAME", conflicts_with_all = ["incode", "outcode"])]
    pub code: Option<String>,

    /// Copy text without trimming; still reports trailing white space
    #[arg(long, conflicts_with = "trim")]
    pub copy: bool,

    /// Remove trailing white space (the default; opposite of --copy)
    #[arg(long, hide = true)]
    pub trim: bool,

    /// Input character set
    #[arg(long, value_name = "NAME")]
    pub incode: Option<String>,

    /// Output character set; unmappable characters become '?'
    #[arg(long, value_name = "NAME")]
    pub outcode: Option<String>,

    /// Input file name, for names that look like options
    #[arg(long, value_name = "NAME", conflicts_with = "stdin")]
    pub input: Option<String>,

    /// Output file name, for names that look like options
    #[arg(long, value_name = "NAME", conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Read input from standard input instead of a file
    #[arg(long)]
    pub stdin: bool,

    /// Write output on standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Keep each line's original separator (default)
    #[arg(long, visible_alias = "asis")]
    pub same: bool,

    /// Separate output lines with LF (0x0A)
    #[arg(long, visible_aliases = ["nl", "unix"])]
    pub lf: bool,

    /// Separate output lines with CR (0x0D)
    #[arg(long, visible_alias = "mac")]
    pub cr: bool,

    /// Separate output lines with CR/LF pairs (0x0D 0x0A)
    #[arg(long, visible_alias = "dos")]
    pub crlf: bool,

    /// Use the local system's line separator on output
    #[arg(long, visible_alias = "default")]
    pub local: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn separator_mode(&self) -> SeparatorMode {
        if self.lf {
            SeparatorMode::Unix
        } else if self.cr {
            SeparatorMode::Mac
        } else if self.crlf {
            SeparatorMode::Dos
        } else if self.local {
            SeparatorMode::Local
        } else {
            SeparatorMode::Preserve
        }
    }

    /// (input, output) charset labels, `None` meaning the default.
    pub fn charset_labels(&self) -> (Option<&str>, Option<&str>) {
        match self.code.as_deref() {
            Some(both) => (Some(both), Some(both)),
            None => (self.incode.as_deref(), self.outcode.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("trimws").chain(args.iter().copied()))
    }

    #[test]
    fn separator_aliases() {
        assert_eq!(parse(&["--unix", "f"]).unwrap().separator_mode(), SeparatorMode::Unix);
        assert_eq!(parse(&["--dos", "f"]).unwrap().separator_mode(), SeparatorMode::Dos);
        assert_eq!(parse(&["--mac", "f"]).unwrap().separator_mode(), SeparatorMode::Mac);
        assert_eq!(parse(&["--default", "f"]).unwrap().separator_mode(), SeparatorMode::Local);
        assert_eq!(parse(&["f"]).unwrap().separator_mode(), SeparatorMode::Preserve);
    }

    #[test]
    fn separator_flags_are_exclusive() {
        assert!(parse(&["--lf", "--crlf", "f"]).is_err());
    }

    #[test]
    fn code_sets_both_charsets() {
        let cli = parse(&["--code", "utf-16le", "f"]).unwrap();
        assert_eq!(cli.charset_labels(), (Some("utf-16le"), Some("utf-16le")));
    }

    #[test]
    fn code_conflicts_with_incode() {
        assert!(parse(&["--code", "utf-8", "--incode", "latin1", "f"]).is_err());
    }

    #[test]
    fn input_conflicts_with_stdin() {
        assert!(parse(&["--input", "a", "--stdin"]).is_err());
    }

    #[test]
    fn copy_conflicts_with_trim() {
        assert!(parse(&["--copy", "--trim", "f"]).is_err());
    }
}
