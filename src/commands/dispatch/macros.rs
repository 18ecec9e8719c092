//! Macros for command timing

/// Trace elapsed time of a command phase when `--verbose` is on
///
/// ```ignore
/// trace_command!(ctx.cli, ctx.start, "open_lexicon");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $label:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
