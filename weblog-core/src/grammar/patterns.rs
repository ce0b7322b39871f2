// Digit classes are spelled `[0-9]` because `\d` is Unicode-aware in `regex`.

pub(super) const ACCESS: &str = concat!(
    r#"(?P<client>\S+) \S+ \S+ "#,
    r#"\[(?P<time>[^\]]+)\] "#,
    r#""(?P<method>\S+) (?P<path>\S+) (?P<protocol>[^"]+)" "#,
    r#"(?P<status>[0-9]{3}) (?P<size>\S+) "#,
    r#""(?P<referer>[^"]*)" "(?P<agent>[^"]*)""#,
);

pub(super) const ACCESS_FIELDS: &[&str] = &[
    "client", "time", "method", "path", "protocol", "status", "size", "referer", "agent",
];

pub(super) const ERROR: &str = concat!(
    r"\[(?P<time>[^\]]+)\] ",
    r"\[(?P<module>[^:]+):(?P<level>[^\]]+)\] ",
    r"\[pid (?P<pid>[0-9]+)\] ",
    r"\[client (?P<client>[^\]]+)\] ",
    r"(?P<message>.*)",
);

pub(super) const ERROR_FIELDS: &[&str] = &["time", "module", "level", "pid", "client", "message"];
