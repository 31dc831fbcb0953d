//! One-shot logging: every shell script needs a way to emit a single
//! structured line without linking the library.

use crate::cli::util::parse_attr;
use crate::handler::{HandlerOptions, TextHandler};
use crate::internal;
use crate::level::Level;
use crate::record::Record;
use std::io::Write;
use std::process::ExitCode;

/// Arguments of `prismlog log`, already mapped to library types.
#[derive(Debug)]
pub struct LogArgs<'a> {
    pub level: Level,
    pub message: &'a str,
    pub attrs: &'a [String],
    pub min_level: Option<Level>,
    pub groups: &'a [String],
    pub message_separator: Option<&'a str>,
    pub attr_separator: Option<&'a str>,
}

/// Renders one record to `out`.
#[must_use]
pub fn cmd_log(
    args: &LogArgs<'_>,
    options: HandlerOptions,
    out: impl Write + Send + 'static,
) -> ExitCode {
    let mut options = options;
    if let Some(level) = args.min_level {
        options = options.level(level);
    }
    if let Some(sep) = args.message_separator {
        options = options.message_separator(sep);
    }
    if let Some(sep) = args.attr_separator {
        options = options.attr_separator(sep);
    }

    let handler = args
        .groups
        .iter()
        .fold(TextHandler::new(out, &options), |h, group| h.with_group(group));

    if !handler.enabled(args.level) {
        return ExitCode::SUCCESS;
    }

    let mut record = Record::new(args.level, args.message);
    record.add_attrs(args.attrs.iter().map(String::as_str).map(parse_attr));

    if let Err(e) = handler.handle(&record).and_then(|()| handler.flush()) {
        internal::error("Write failed", &[crate::Attr::string("reason", e.to_string())]);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
