// crates/trimws-core/tests/incremental_output.rs

use std::io;

use trimws_core::{CharSink, CharSource, Config, Engine, Result, StrSource, TrimError};

#[derive(Default)]
struct Chunks(Vec<String>);

impl CharSink for Chunks {
    fn write_chars(&mut self, chars: &str) -> Result<()> {
        self.0.push(chars.to_string());
        Ok(())
    }
}

struct FailingSink;

impl CharSink for FailingSink {
    fn write_chars(&mut self, _chars: &str) -> Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into())
    }
}

struct FailingSource {
    left: usize,
}

impl CharSource for FailingSource {
    fn next_char(&mut self) -> Result<Option<char>> {
        if self.left == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "device gone").into());
        }
        self.left -= 1;
        Ok(Some('a'))
    }
}

#[test]
fn each_line_is_written_as_it_ends() {
    let mut engine = Engine::new(Config::default()).expect("engine");
    let mut sink = Chunks::default();
    engine
        .run(&mut StrSource::new("one \ntwo\r\nthree"), &mut sink)
        .expect("run");
    assert_eq!(sink.0, vec!["one\n", "two\r\n", "three"]);
}

#[test]
fn long_line_is_written_ahead_without_terminator() {
    let mut engine = Engine::new(Config::default().with_flush_threshold(4)).expect("engine");
    let mut sink = Chunks::default();
    engine
        .run(&mut StrSource::new("abcdefgh  \n"), &mut sink)
        .expect("run");
    assert_eq!(sink.0, vec!["abcd", "efgh", "\n"]);
}

#[test]
fn write_failure_aborts_run() {
    let mut engine = Engine::new(Config::default()).expect("engine");
    let err = engine
        .run(&mut StrSource::new("x\ny\n"), &mut FailingSink)
        .unwrap_err();
    assert!(matches!(err, TrimError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn read_failure_aborts_run() {
    let mut engine = Engine::new(Config::default()).expect("engine");
    let mut out = String::new();
    let err = engine
        .run(&mut FailingSource { left: 3 }, &mut out)
        .unwrap_err();
    assert!(matches!(err, TrimError::Io(_)));
}

#[test]
fn engine_is_reusable_across_runs() {
    let mut engine = Engine::new(Config::default()).expect("engine");
    let (a, ca) = engine.run_str("a  ").expect("first");
    let (b, cb) = engine.run_str("b\t\n").expect("second");
    assert_eq!((a.as_str(), ca.trimmed), ("a", 2));
    assert_eq!((b.as_str(), cb.trimmed), ("b\n", 1));
}

#[test]
fn config_is_readable_after_construction() {
    let engine = Engine::new(Config::default().with_flush_threshold(4)).expect("engine");
    assert_eq!(engine.config().flush_threshold, 4);
    assert!(engine.config().trim);
}
