use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::sync::Arc;

use langshare::cli;
use langshare::logging::{self, Verbosity};
use langshare::{ExtensionClassifier, OutputFormatter, RunOutcome, Runner};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let settings = args.settings()?;
    let classifier = ExtensionClassifier::with_overrides(settings.extensions.clone());
    let runner = Runner::new(Arc::new(classifier), &settings);

    match runner
        .run(&args.path)
        .with_context(|| format!("Failed to analyze {}", args.path.display()))?
    {
        RunOutcome::Completed(report) => {
            let rendered = OutputFormatter::to_json(&report).context("Failed to render report")?;
            OutputFormatter::write(&rendered, args.output_file.as_deref())?;
        }
        // A timed-out run prints nothing and still exits cleanly.
        RunOutcome::TimedOut => {}
    }

    Ok(())
}
