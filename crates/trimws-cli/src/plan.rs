// crates/trimws-cli/src/plan.rs
//
// Decide which of the positional names is input and which is output.

use std::fmt;
use std::path::PathBuf;


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Std,
    File(PathBuf),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Std => f.write_str("-"),
            Endpoint::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Malformed invocation; the caller shows usage text with it.
#[derive(Debug)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

fn usage(msg: impl Into<String>) -> anyhow::Error {
    UsageError(msg.into()).into()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IoPlan {
    pub input: Endpoint,
    pub output: Endpoint,
}

/// Explicit `--input`/`--stdin` (and `--output`/`--stdout`) win; otherwise
/// positionals fill input first, then output. Output defaults to stdout.
/// Empty positionals are ignored, as scripts often pass them.
pub fn resolve(
    input: Option<&str>,
    stdin: bool,
    output: Option<&str>,
    stdout: bool,
    files: &[String],
) -> anyhow::Result<IoPlan> {
    let mut names = files.iter().filter(|s| !s.is_empty());

    let input = match (input, stdin) {
        (Some(_), true) => return Err(usage("can't use --input and --stdin together")),
        (Some(name), false) => Endpoint::File(name.into()),
        (None, true) => Endpoint::Std,
        (None, false) => match names.next() {
            Some(name) => Endpoint::File(name.into()),
            None => return Err(usage("missing input file name")),
        },
    };

    let output = match (output, stdout) {
        (Some(_), true) => return Err(usage("can't use --output and --stdout together")),
        (Some(name), false) => Endpoint::File(name.into()),
        (None, true) => Endpoint::Std,
        (None, false) => names
            .next()
            .map_or(Endpoint::Std, |name| Endpoint::File(name.into())),
    };

    if let Some(extra) = names.next() {
        return Err(usage(format!(
            "too many file names on command line: {extra}"
        )));
    }

    Ok(IoPlan { input, output })
}
