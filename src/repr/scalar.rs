//! Bodies of scalar renderings, the part between the braces of `TYPE{...}`.

use chrono::SecondsFormat;

use crate::types::{Content, DbDuration, DbPoint};

const NANOS_PER_SECOND: u128 = 1_000_000_000;

pub(super) fn body(content: &Content) -> String {
    match content {
        Content::Null => "null".to_owned(),
        Content::Boolean(b) => b.to_string(),
        Content::Integer(i) => i.to_string(),
        Content::Float(f) => float(*f),
        Content::String(s) => quoted(s),
        Content::Bytes(b) => format!("{b:?}"),
        Content::Date(d) => d.to_string(),
        Content::Time(t) => match t.offset() {
            Some(offset) => format!("{}{offset}", t.time),
            None => format!("{}{:+}s", t.time, t.offset_seconds),
        },
        Content::LocalTime(t) => t.to_string(),
        Content::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        Content::LocalDateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        Content::Duration(d) => duration(d),
        Content::Point(p) => point(p),
        // Composite kinds are rendered by the caller; keep a total fallback.
        Content::List(_)
        | Content::Map(_)
        | Content::Node(_)
        | Content::Relationship(_)
        | Content::Path(_) => format!("{content:?}"),
        Content::Undefined { text, .. } => text.clone(),
    }
}

/// A float whose text reads like an integer gets its native type name
/// appended, so `FLOAT{1}` is never mistaken for an INTEGER in a log.
fn float(f: f64) -> String {
    let text = f.to_string();
    let integral_looking = text.chars().all(|c| c.is_ascii_digit() || c == '-');
    if integral_looking {
        format!("{text} ({})", std::any::type_name::<f64>())
    } else {
        text
    }
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// ISO-8601 `P{m}M{d}DT{s}S`, fractional seconds only when present.
fn duration(d: &DbDuration) -> String {
    let total = d.total_nanos();
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.unsigned_abs();
    let (secs, nanos) = (abs / NANOS_PER_SECOND, abs % NANOS_PER_SECOND);
    let mut out = format!("P{}M{}DT{sign}{secs}", d.months(), d.days());
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('S');
    out
}

fn point(p: &DbPoint) -> String {
    match p.z() {
        Some(z) => format!("srid={}, x={:?}, y={:?}, z={z:?}", p.srid(), p.x(), p.y()),
        None => format!("srid={}, x={:?}, y={:?}", p.srid(), p.x(), p.y()),
    }
}
