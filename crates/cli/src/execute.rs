//! Feed an event stream through the progress listener

use crate::capabilities::TerminalCapabilities;
use crate::Cli;
use eyre::WrapErr;
use provision_progress_core::{
    EngineCallbacks, EventStream, ProgressConfig, ProgressListener, RenderMode, RunTally,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{debug, info};

/// Render every event from the configured input to stdout
pub fn run(cli: &Cli) -> eyre::Result<RunTally> {
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open event stream {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let capabilities = TerminalCapabilities::detect();
    let mode = capabilities.recommend_mode(cli.requested_mode());
    debug!(?capabilities, ?mode, "selected render mode");

    let config = ProgressConfig::default().with_mode(mode);
    render(reader, io::stdout().lock(), config, cli.strict)
}

/// Drive a listener over `reader`, writing the report to `writer`
pub fn render<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: ProgressConfig,
    strict: bool,
) -> eyre::Result<RunTally> {
    let mut listener = ProgressListener::with_config(writer, config);
    let events = if strict {
        EventStream::strict(reader)
    } else {
        EventStream::new(reader)
    };

    for event in events {
        match event {
            Ok(event) => listener.dispatch(&event),
            Err(e) => {
                listener.finish();
                return Err(e).wrap_err("event stream aborted");
            }
        }
    }
    let tally = listener.finish().tally;
    info!(
        ok = tally.ok,
        failed = tally.failed,
        ignored = tally.ignored,
        skipped = tally.skipped,
        total = tally.total(),
        suppressed = listener.suppressed_messages(),
        "run finished"
    );
    Ok(tally)
}

impl Cli {
    fn requested_mode(&self) -> Option<RenderMode> {
        if self.plain {
            Some(RenderMode::Plain)
        } else if self.interactive {
            Some(RenderMode::Interactive)
        } else {
            None
        }
    }
}
