mod common;

use common::{SharedBuf, plain_options};
use prismlog::fmt::{KeyStyles, LevelStyles, SpecialStyles, ValueStyles};
use prismlog::{Attr, HandlerOptions, Level, Record, Style, TextHandler};
use std::collections::HashMap;
use std::time::Duration;

fn record(level: Level, msg: &str, attrs: Vec<Attr>) -> Record {
    let mut r = Record::at(None, level, msg);
    r.add_attrs(attrs);
    r
}

#[test]
fn renders_attributes_with_custom_separators() {
    let out = SharedBuf::new();
    let opts = HandlerOptions::new()
        .no_color(true)
        .color_env(None::<String>)
        .message_separator("<mas>")
        .attr_separator("<aas>");
    let h = TextHandler::new(out.clone(), &opts);

    h.handle(&record(
        Level::ERROR,
        "Testing Attributes",
        vec![
            Attr::string("some", "attribute"),
            Attr::int64("i64k", 23),
            Attr::bool("bk", true),
        ],
    ))
    .unwrap();

    assert_eq!(
        out.contents(),
        "|ERR Testing Attributes<mas>some=\"attribute\"<aas>i64k=23<aas>bk=true\n"
    );
}

#[test]
fn default_separators_are_newline_tab() {
    let out = SharedBuf::new();
    let opts = HandlerOptions::new().no_color(true).color_env(None::<String>);
    let h = TextHandler::new(out.clone(), &opts);

    h.handle(&record(Level::INFO, "m", vec![Attr::int64("a", 1), Attr::int64("b", 2)]))
        .unwrap();

    assert_eq!(out.contents(), "|INF m\n\ta=1\n\tb=2\n");
}

#[test]
fn message_without_attributes_has_no_separator() {
    let out = SharedBuf::new();
    let h = TextHandler::new(out.clone(), &plain_options());

    h.handle(&record(Level::WARN, "alone", vec![])).unwrap();
    h.handle(&record(Level::DEBUG, "only empty", vec![Attr::group("g", vec![])]))
        .unwrap();

    assert_eq!(out.contents(), "|WRN alone\n|DBG only empty\n");
}

#[test]
fn timestamp_is_millisecond_precision_without_zone() {
    let out = SharedBuf::new();
    let h = TextHandler::new(out.clone(), &plain_options());
    let time = chrono::DateTime::parse_from_rfc3339("2024-03-05T07:08:09.123456+02:00").unwrap();

    h.handle(&Record::at(Some(time), Level::INFO, "t")).unwrap();

    assert_eq!(out.contents(), "2024-03-05T07:08:09.123|INF t\n");
}

#[test]
fn records_below_minimum_level_are_disabled() {
    let h = TextHandler::new(std::io::sink(), &plain_options().level(Level::WARN));
    assert!(!h.enabled(Level::DEBUG));
    assert!(!h.enabled(Level::INFO));
    assert!(h.enabled(Level::WARN));
    assert!(h.enabled(Level::ERROR));
}

#[test]
fn level_var_threshold_changes_live() {
    let var = std::sync::Arc::new(prismlog::LevelVar::new(Level::ERROR));
    let h = TextHandler::new(std::io::sink(), &plain_options().leveler(var.clone()));
    assert!(!h.enabled(Level::WARN));
    var.set(Level::DEBUG);
    assert!(h.enabled(Level::DEBUG));
}

#[test]
fn out_of_range_level_renders_invalid_marker() {
    let out = SharedBuf::new();
    let h = TextHandler::new(out.clone(), &token_options());

    h.handle(&record(Level::new(12), "odd", vec![])).unwrap();

    assert_eq!(out.contents(), "|INVALID <sm>odd<ro>\n");
}

#[test]
fn values_render_by_kind() {
    let out = SharedBuf::new();
    let h = TextHandler::new(out.clone(), &plain_options());
    let time = chrono::DateTime::parse_from_rfc3339("2020-01-02T03:04:05.006Z").unwrap();

    h.handle(&record(
        Level::INFO,
        "kinds",
        vec![
            Attr::string("s", "a \"q\"\n"),
            Attr::int64("i", -7),
            Attr::uint64("u", 7),
            Attr::float64("f", 324.2),
            Attr::bool("b", false),
            Attr::time("t", &time),
            Attr::duration("d", Duration::from_millis(1500)),
            Attr::any("v", vec![1, 2]),
            Attr::new("n", prismlog::Value::default()),
        ],
    ))
    .unwrap();

    assert_eq!(
        out.contents(),
        "|INF kinds | s=\"a \\\"q\\\"\\n\" i=-7 u=7 f=324.2 b=false \
         t=2020-01-02T03:04:05.006 d=1.5s v=[1, 2] n=<nil>\n"
    );
}

#[test]
fn lazy_values_resolve_at_render_time() {
    let out = SharedBuf::new();
    let h = TextHandler::new(out.clone(), &plain_options());
    let lazy = Attr::lazy("lz", || prismlog::Value::lazy(|| prismlog::Value::from(5_i64)));

    h.handle(&record(Level::INFO, "m", vec![lazy])).unwrap();

    assert_eq!(out.contents(), "|INF m | lz=5\n");
}

/// Options where every style role is a visible marker, so positions of the
/// tokens can be asserted textually.
fn token_options() -> HandlerOptions {
    HandlerOptions::new()
        .level(Level::DEBUG)
        .no_color(false)
        .color_env(None::<String>)
        .message_separator(" ")
        .attr_separator(" ")
        .reset_style(Style::from("<ro>"))
        .symbol_style(Style::from("<so>"))
        .level_styles(LevelStyles {
            debug: Style::from("<ld>"),
            info: Style::from("<li>"),
            warn: Style::from("<lw>"),
            error: Style::from("<le>"),
        })
        .value_styles(ValueStyles {
            string: Style::from("<vs>"),
            int: Style::from("<vi>"),
            float: Style::from("<vf>"),
            uint: Style::from("<vu>"),
            error: Style::from("<ve>"),
            time: Style::from("<vt>"),
            bool: Style::from("<vb>"),
            duration: Style::from("<vd>"),
            any: Style::from("<va>"),
        })
        .key_styles(KeyStyles {
            default: Style::from("<kd>"),
            keys: HashMap::from([("hot".to_string(), Style::from("<kh>"))]),
            groups: HashMap::from([("g".to_string(), Style::from("<gg>"))]),
        })
        .special_styles(SpecialStyles {
            time: Style::from("<st>"),
            message: Style::from("<sm>"),
        })
}

#[test]
fn every_role_uses_its_override_token() {
    let out = SharedBuf::new();
    let h = TextHandler::new(out.clone(), &token_options());

    let rec = Record::new(Level::WARN, "msg")
        .with_attr(Attr::string("s", "x"))
        .with_attr(Attr::int64("hot", 1))
        .with_attr(Attr::error("e", std::io::Error::other("boom")))
        .with_attr(Attr::group("g", vec![Attr::duration("d", Duration::from_secs(2))]));
    h.handle(&rec).unwrap();

    let line = out.contents();
    let re = regex::Regex::new(concat!(
        r"^<st>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}<ro>",
        r"<lw>\|WRN <ro><sm>msg<ro><so> <ro>(.*)\n$",
    ))
    .unwrap();
    let caps = re.captures(&line).unwrap_or_else(|| panic!("unexpected line: {line:?}"));
    assert_eq!(
        &caps[1],
        "<kd>s<ro><so>=<ro><vs>\"x\"<ro><so> <ro>\
         <kh>hot<ro><so>=<ro><vi>1<ro><so> <ro>\
         <kd>e<ro><so>=<ro><ve>boom<ro><so> <ro>\
         <gg>g<ro><so>.<ro><kd>d<ro><so>=<ro><vd>2s<ro>"
    );
}

#[test]
fn missing_entries_in_override_table_render_unstyled() {
    let out = SharedBuf::new();
    let opts = token_options().level_styles(LevelStyles {
        info: Style::from("<li>"),
        ..LevelStyles::plain()
    });
    let h = TextHandler::new(out.clone(), &opts);

    h.handle(&record(Level::DEBUG, "m", vec![])).unwrap();
    h.handle(&record(Level::INFO, "m", vec![])).unwrap();

    assert_eq!(
        out.contents(),
        "|DBG <ro><sm>m<ro>\n<li>|INF <ro><sm>m<ro>\n"
    );
}

#[test]
fn default_palette_colors_levels_and_error_keys() {
    let out = SharedBuf::new();
    let h = TextHandler::new(out.clone(), &common::color_options());

    h.handle(&record(Level::ERROR, "m", vec![Attr::string("err", "x")])).unwrap();

    let line = out.contents();
    assert!(line.starts_with("\x1b[31m|ERR \x1b[0m"), "{line:?}");
    assert!(line.contains("\x1b[31;2merr\x1b[0m"), "{line:?}");
    assert!(line.contains("\x1b[2;97m=\x1b[0m"), "{line:?}");
}
