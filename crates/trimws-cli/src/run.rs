// crates/trimws-cli/src/run.rs

use anyhow::{bail, Context};
use trimws_core::{separator, Charset, Config, Counters, Engine};

use crate::args::Cli;
use crate::{io, plan, report};

pub fn execute(cli: &Cli) -> anyhow::Result<Counters> {
    let plan = plan::resolve(
        cli.input.as_deref(),
        cli.stdin,
        cli.output.as_deref(),
        cli.stdout,
        &cli.files,
    )?;

    // Charsets first, so a bad name never truncates the output file.
    let (incode, outcode) = cli.charset_labels();
    let in_cs = Charset::resolve(incode)?;
    let out_cs = Charset::resolve(outcode)?;

    let config = Config::new(cli.separator_mode(), separator::host_default())
        .with_trim(!cli.copy)
        .with_clean(cli.clean);
    let mut engine = Engine::new(config)?;

    if io::same_file(&plan.input, &plan.output) {
        bail!("input and output are the same file: {}", plan.input);
    }

    tracing::debug!(
        input = %plan.input,
        output = %plan.output,
        incode = in_cs.name(),
        outcode = out_cs.name(),
        "resolved streams"
    );

    let mut reader = io::open_source(&plan.input, in_cs)?;
    let mut writer = io::open_sink(&plan.output, out_cs)?;

    let counters = engine
        .run(&mut reader, &mut writer)
        .context("file I/O error")?;

    let substituted = writer.substituted();
    writer.finish().context("file I/O error")?;
    if substituted > 0 {
        tracing::debug!(substituted, charset = out_cs.name(), "unmappable characters replaced");
    }

    for line in report::summary(&counters, engine.config().trim, engine.config().clean) {
        eprintln!("{line}");
    }
    Ok(counters)
}
