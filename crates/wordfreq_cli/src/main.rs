use std::io::{self, Write};
use std::process::ExitCode;

use log::LevelFilter;
use wordfreq_cli::{Session, SessionError};
use wordfreq_logging::wf_debug;

fn main() -> ExitCode {
    wordfreq_logging::initialize_stderr(LevelFilter::Warn);

    let session = Session::default();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match session.run(stdin.lock(), stdout.lock()) {
        Ok(summary) => {
            wf_debug!(
                "lines read: {}, blank: {}, reports: {}",
                summary.lines_read,
                summary.blank_lines,
                summary.reports
            );
            ExitCode::SUCCESS
        }
        Err(SessionError::Read(err)) => {
            let _ = writeln!(
                io::stderr(),
                "{}{}",
                session.text().read_error_prefix,
                err
            );
            ExitCode::FAILURE
        }
        Err(err @ SessionError::Write(_)) => {
            let _ = writeln!(io::stderr(), "{err}");
            ExitCode::FAILURE
        }
    }
}
