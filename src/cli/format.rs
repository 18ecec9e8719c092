//! Format output dispatch helpers

/// Dispatch on the output format when the JSON branch returns a `Result`
/// and the human branch prints.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&value) },
///     human => { println!("{}", value); }
/// )?;
/// ```
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok::<(), lexis_core::error::LexisError>(())
            }
        }
    };
}

pub(crate) use output_by_format_result;
