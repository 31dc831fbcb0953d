mod common;

use common::{SharedBuf, plain_options};
use prismlog::{Attr, Level, Record, TextHandler};
use std::thread;

#[test]
fn concurrent_lines_never_interleave() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let out = SharedBuf::new();
    let root =
        TextHandler::new(out.clone(), &plain_options()).with_attrs(&[Attr::string("app", "t")]);

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let h = root.with_group(&format!("w{i}"));
            thread::spawn(move || {
                let payload = "x".repeat(64 * (i + 1));
                for n in 0..PER_THREAD as i64 {
                    let mut record = Record::at(None, Level::INFO, "work");
                    record.add_attrs([Attr::int64("n", n), Attr::string("p", payload.clone())]);
                    h.handle(&record).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let text = out.contents();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let re =
        regex::Regex::new(r#"^\|INF work \| app="t" w(\d)\.n=(\d+) w(\d)\.p="(x+)"$"#).unwrap();
    for line in lines {
        let caps = re.captures(line).unwrap_or_else(|| panic!("torn line: {line:?}"));
        assert_eq!(caps[1], caps[3]);
        let worker: usize = caps[1].parse().unwrap();
        assert_eq!(caps[4].len(), 64 * (worker + 1));
    }
}

#[test]
fn derivations_race_safely() {
    let out = SharedBuf::new();
    let root = TextHandler::new(out.clone(), &plain_options());

    thread::scope(|s| {
        for i in 0..4_i64 {
            let root = &root;
            s.spawn(move || {
                for _ in 0..50 {
                    let h = root.with_attrs(&[Attr::int64("i", i)]).with_group("g");
                    h.handle(&Record::at(None, Level::DEBUG, "d")).unwrap();
                }
            });
        }
    });

    assert_eq!(root.state().preformatted(), "");
    assert!(out.contents().lines().all(|l| l.starts_with("|DBG d | i=")));
}
