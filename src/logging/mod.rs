mod pretty_list;

use std::{fmt::Write as FmtWrite, sync::OnceLock};

use anyhow::Result;
use flexi_logger::{
    DeferredNow, FileSpec, Logger, LoggerHandle, Record, WriteMode,
};
use regex::Regex;
use textwrap::{termwidth, Options};

pub use self::pretty_list::PrettyList;

/// Matches the last line of a wrapped log record so its delimiter can be
/// swapped for the closing one.
fn last_line_matcher() -> &'static Regex {
    static MATCHER: OnceLock<Regex> = OnceLock::new();
    MATCHER.get_or_init(|| {
        Regex::new(r"(┃)(.*)$").expect("the delimiter pattern is valid")
    })
}

/// Setup file logging for this application.
///
/// The terminal is owned by the animation while it runs, so records are only
/// written to files in `logs/`. The returned handle must be kept alive until
/// exit so buffered records are flushed.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory("logs").basename("swirl"))
        .format(multiline_format)
        .write_mode(WriteMode::Async)
        .start()?;

    log::info!(
        "Adjust the log level by setting RUST_LOG. By default RUST_LOG=info"
    );

    Ok(handle)
}

/// An opinionated formatting function for flexi_logger which automatically
/// wraps content to the terminal width.
pub fn multiline_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let size = termwidth().min(74);
    let wrap_options = Options::new(size)
        .initial_indent("┏ ")
        .subsequent_indent("┃ ");

    let mut full_line = String::new();
    writeln!(
        full_line,
        "{} [{}] [{}:{}]",
        record.level(),
        now.now().format("%H:%M:%S%.6f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
    )
    .expect("unable to format first log line");

    write!(&mut full_line, "{}", &record.args())
        .expect("unable to format log!");

    let wrapped = textwrap::fill(&full_line, wrap_options);
    let formatted = last_line_matcher().replace(&wrapped, "┗$2");

    writeln!(w, "{}", formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_line_is_closed() {
        let wrapped = "┏ INFO [x]\n┃ first\n┃ second";
        let formatted = last_line_matcher().replace(wrapped, "┗$2");
        assert_eq!(formatted, "┏ INFO [x]\n┃ first\n┗ second");
    }

    #[test]
    fn single_line_records_are_untouched() {
        let formatted = last_line_matcher().replace("┏ INFO [x]", "┗$2");
        assert_eq!(formatted, "┏ INFO [x]");
    }
}
