use crate::record::AppRecord;
use std::fmt::Write;

/// Encode records back into the `const APPS = [...]` declaration.
///
/// The output layout is the one the host pages were authored with: one
/// object per record, fixed key order, unquoted keys, bare booleans, a
/// trailing comma after each object. String values are emitted verbatim
/// with no escaping; values containing `"`, `\` or newlines are outside
/// the supported input domain and are rejected upstream at validation
/// time.
pub fn serialize_records(records: &[AppRecord]) -> String {
    let mut out = String::from("const APPS = [");

    for record in records {
        out.push_str("\n  {\n");
        let _ = writeln!(out, "    name: \"{}\",", record.name);
        let _ = writeln!(out, "    icon: \"{}\",", record.icon);
        let _ = writeln!(out, "    locker_id: \"{}\",", record.locker_id);
        let _ = writeln!(out, "    platforms: {},", platform_list(&record.platforms));
        let _ = writeln!(out, "    trending: {},", record.trending);
        let _ = writeln!(out, "    featured: {}", record.featured);
        out.push_str("  },");
    }

    out.push_str("\n];");
    out
}

fn platform_list(platforms: &[String]) -> String {
    let quoted: Vec<String> = platforms.iter().map(|p| format!("\"{}\"", p)).collect();
    format!("[{}]", quoted.join(", "))
}
