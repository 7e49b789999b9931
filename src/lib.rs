/// Language share reporter
///
/// Walks a file tree, classifies every eligible file and reports each
/// language's share of the counted files, all under a wall-clock deadline.
pub mod classifier;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod tally;

pub use classifier::{Classifier, ExtensionClassifier};
pub use config::Settings;
pub use output::{LabelSet, OutputFormatter, PercentageReport};
pub use runner::{CancelToken, RunOutcome, Runner};
pub use tally::Tally;
