//! Prometheus text exposition format.
//!
//! Renders the registry snapshot into the Prometheus text exposition
//! format: one `web_health_check` gauge sample per (name, url) pair.

use crate::registry::CheckKey;

/// Render registry entries into Prometheus text format.
pub fn render_prometheus(entries: &[(CheckKey, u8)]) -> String {
    let mut out = String::new();

    out.push_str("# HELP web_health_check Web health check\n");
    out.push_str("# TYPE web_health_check gauge\n");
    for (key, value) in entries {
        out.push_str(&format!(
            "web_health_check{{name=\"{}\",url=\"{}\"}} {}\n",
            escape_label(&key.name),
            escape_label(&key.url),
            value
        ));
    }

    out
}

/// Escape a label value per the exposition format rules.
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
