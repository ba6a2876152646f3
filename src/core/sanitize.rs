// src/core/sanitize.rs

/// Collapse whitespace runs (incl. `&nbsp;` once decoded) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove every occurrence of `label` and trim what is left.
pub fn strip_label(s: &str, label: &str) -> String {
    s.replace(label, "").trim().to_string()
}

/// Text after the last `start`, cut at the first following `end` (if any).
/// `"Days of Run: M T W Type: SF"` with ("Days of Run:", "Type:") → `"M T W"`.
pub fn between(s: &str, start: &str, end: &str) -> String {
    let tail = s.rsplit(start).next().unwrap_or(s);
    let cut = tail.split(end).next().unwrap_or(tail);
    cut.trim().to_string()
}

/// Text after the last `marker`, or "" when the marker is absent.
pub fn after(s: &str, marker: &str) -> String {
    match s.rfind(marker) {
        Some(i) => s[i + marker.len()..].trim().to_string(),
        None => s!(),
    }
}
