//! The orchestrator: walk, extract, dispatch.

use std::path::Path;

use tagrun_common_config::RunConfig;
use tagrun_common_core::Annotation;
use tagrun_common_fs::{FileWalker, WalkError};
use tagrun_dispatch::CommandDispatcher;
use tagrun_extract::AnnotationExtractor;
use tracing::{debug, error, info, instrument};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Source files handed to the extractor.
    pub files: usize,
    /// Directives found across all files.
    pub annotations: usize,
    /// Commands that completed (or were printed, in dry-run mode).
    pub succeeded: usize,
    /// Files that could not be read or parsed.
    pub parse_failures: usize,
    /// Commands that could not be built or exited unsuccessfully.
    pub dispatch_failures: usize,
}

/// Ties a traverser, an extractor and a dispatcher to one configuration.
#[derive(Debug)]
pub struct App<W, X, D> {
    config: RunConfig,
    walker: W,
    extractor: X,
    dispatcher: D,
}

impl<W, X, D> App<W, X, D>
where
    W: FileWalker,
    X: AnnotationExtractor,
    D: CommandDispatcher,
{
    /// Create a new app.
    pub fn new(config: RunConfig, walker: W, extractor: X, dispatcher: D) -> Self {
        Self {
            config,
            walker,
            extractor,
            dispatcher,
        }
    }

    /// Configuration this app runs with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Process every file under the configured root.
    ///
    /// Parse and dispatch failures are logged and counted; only a failed
    /// traversal is returned as an error.
    #[instrument(skip(self), fields(root = %self.config.root.display(), keyword = %self.config.keyword))]
    pub fn run(&self) -> Result<RunSummary, WalkError> {
        let mut summary = RunSummary::default();

        self.walker.walk(&self.config.root, |path| {
            self.process_file(path, &mut summary);
            Ok(())
        })?;

        info!(
            files = summary.files,
            annotations = summary.annotations,
            succeeded = summary.succeeded,
            parse_failures = summary.parse_failures,
            dispatch_failures = summary.dispatch_failures,
            "run complete"
        );
        Ok(summary)
    }

    fn process_file(&self, path: &Path, summary: &mut RunSummary) {
        summary.files += 1;

        let annotations = match self.extractor.extract(path, &self.config.keyword) {
            Ok(annotations) => annotations,
            Err(e) => {
                summary.parse_failures += 1;
                error!(path = %path.display(), "Error parsing {}: {e}", path.display());
                return;
            }
        };

        debug!(path = %path.display(), count = annotations.len(), "extracted annotations");
        for annotation in &annotations {
            summary.annotations += 1;
            if self.dispatch(annotation) {
                summary.succeeded += 1;
            } else {
                summary.dispatch_failures += 1;
            }
        }
    }

    fn dispatch(&self, annotation: &Annotation) -> bool {
        let result = self.dispatcher.dispatch(
            &self.config.template,
            annotation.arguments(),
            self.config.dry_run,
        );
        match result {
            Ok(()) => true,
            Err(e) => {
                error!(
                    declaration = annotation.declaration(),
                    path = %annotation.source_path().display(),
                    "Error running command for {}: {e}",
                    annotation.declaration()
                );
                false
            }
        }
    }
}
