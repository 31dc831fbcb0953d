//! Shows what the current palette looks like for every level and value kind.

use crate::attr::Attr;
use crate::handler::{HandlerOptions, TextHandler};
use crate::level::Level;
use crate::record::Record;
use chrono::Local;
use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

#[must_use]
pub fn cmd_demo(options: &HandlerOptions, out: impl Write + Send + 'static) -> ExitCode {
    let options = options.clone().level(Level::DEBUG);
    let handler = TextHandler::new(out, &options)
        .with_attrs(&[Attr::string("service", "demo")])
        .with_group("req");

    let samples = [
        (
            Level::DEBUG,
            "cache lookup",
            vec![Attr::string("key", "user:42"), Attr::bool("hit", false)],
        ),
        (
            Level::INFO,
            "request handled",
            vec![
                Attr::int64("status", 200),
                Attr::duration("took", Duration::from_micros(1_500)),
                Attr::uint64("bytes", 5_120),
            ],
        ),
        (
            Level::WARN,
            "slow upstream",
            vec![
                Attr::float64("ratio", 0.93),
                Attr::time("since", &Local::now()),
                Attr::group(
                    "upstream",
                    vec![Attr::string("host", "db-1"), Attr::int64("port", 5432)],
                ),
            ],
        ),
        (
            Level::ERROR,
            "request failed",
            vec![
                Attr::error("err", std::io::Error::other("connection reset")),
                Attr::any("retries", [1, 2, 4]),
            ],
        ),
    ];

    for (level, msg, attrs) in samples {
        let mut record = Record::new(level, msg);
        record.add_attrs(attrs);
        if handler.handle(&record).is_err() {
            return ExitCode::FAILURE;
        }
    }
    if handler.flush().is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
