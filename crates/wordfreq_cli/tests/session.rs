use std::io::{self, BufReader, Cursor, Read, Write};
use std::sync::Once;

use pretty_assertions::assert_eq;
use wordfreq_cli::{Session, SessionError, SessionSummary, SessionText};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordfreq_logging::initialize_for_tests);
}

fn run_english(input: &str) -> (String, SessionSummary) {
    init_logging();
    let mut out = Vec::new();
    let summary = Session::new(SessionText::english())
        .run(Cursor::new(input.as_bytes()), &mut out)
        .unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

const BANNER: &str =
    "CLI word frequency counter\n================\nEnter text to count (Ctrl+C to quit):\n\n";

/// Yields `data` once, then fails every read.
struct FailAfter {
    data: Cursor<Vec<u8>>,
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::other("device went away")),
            n => Ok(n),
        }
    }
}

#[test]
fn immediate_end_of_stream_prints_only_banner_and_prompt() {
    let (out, summary) = run_english("");
    assert_eq!(out, format!("{BANNER}> "));
    assert_eq!(summary, SessionSummary::default());
}

#[test]
fn full_transcript_for_one_sentence() {
    let (out, summary) = run_english("Go Go go GO\n");
    let expected = format!(
        "{BANNER}> \nWord frequency results:\n================\n1. go: 4\n\n> "
    );
    assert_eq!(out, expected);
    assert_eq!(
        summary,
        SessionSummary {
            lines_read: 1,
            blank_lines: 0,
            reports: 1,
        }
    );
}

#[test]
fn blank_lines_reprompt_without_report() {
    let (out, summary) = run_english("\n   \n");
    assert_eq!(
        out,
        format!("{BANNER}> Please enter some text\n> Please enter some text\n> ")
    );
    assert_eq!(summary.blank_lines, 2);
    assert_eq!(summary.reports, 0);
}

#[test]
fn punctuation_line_reports_no_words() {
    let (out, _) = run_english("!!! ??? ...\n");
    assert!(out.contains("================\nNo words found\n\n> "));
}

#[test]
fn final_line_without_newline_is_processed() {
    let (out, summary) = run_english("alpha\r\nbeta beta");
    assert!(out.contains("1. alpha: 1\n"));
    assert!(out.contains("1. beta: 2\n"));
    assert_eq!(summary.reports, 2);
}

#[test]
fn lines_do_not_share_counts() {
    let (out, _) = run_english("the the\nthe\n");
    assert!(out.contains("1. the: 2\n"));
    assert!(out.contains("1. the: 1\n"));
    assert!(!out.contains("1. the: 3\n"));
}

#[test]
fn default_text_uses_times_suffix() {
    init_logging();
    let mut out = Vec::new();
    let input = "The quick brown fox jumps over the lazy dog. The dog barks!\n";
    Session::default().run(Cursor::new(input), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains(
        "词频统计结果:\n================\n1. the: 3次\n2. dog: 2次\n3. barks: 1次\n"
    ));
}

#[test]
fn read_error_ends_session_after_processed_lines() {
    init_logging();
    let reader = BufReader::new(FailAfter {
        data: Cursor::new(b"hello world\n".to_vec()),
    });
    let mut out = Vec::new();
    let err = Session::new(SessionText::english())
        .run(reader, &mut out)
        .unwrap_err();

    assert!(matches!(err, SessionError::Read(_)));
    assert_eq!(err.to_string(), "device went away");
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("1. hello: 1\n2. world: 1\n"));
}

#[test]
fn invalid_utf8_still_counts_ascii_words() {
    let input: &[u8] = b"hello \xff world\nagain\n";
    init_logging();
    let mut out = Vec::new();
    let summary = Session::new(SessionText::english())
        .run(Cursor::new(input), &mut out)
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("1. hello: 1\n2. world: 1\n"));
    assert!(out.contains("1. again: 1\n"));
    assert_eq!(summary.lines_read, 2);
    assert_eq!(summary.reports, 2);
}

/// Accepts writes, fails every flush.
struct FailingFlush {
    written: Vec<u8>,
}

impl Write for FailingFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
}

#[test]
fn write_failure_ends_session_before_reading() {
    init_logging();
    let mut input = Cursor::new(b"never read\n".to_vec());
    let mut out = FailingFlush {
        written: Vec::new(),
    };

    let err = Session::new(SessionText::english())
        .run(&mut input, &mut out)
        .unwrap_err();

    assert!(matches!(err, SessionError::Write(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(err.to_string(), "failed to write output: stdout closed");
    assert_eq!(input.position(), 0);
    assert_eq!(String::from_utf8(out.written).unwrap(), format!("{BANNER}> "));
}
