// src/core/sanitize.rs

/// Turn a free-form label into a safe file stem: spaces become `_`,
/// path and shell-hostile characters are dropped, runs of `_` collapse.
pub fn file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => {}
            c if c.is_whitespace() || c == '_' => {
                if !last_us { out.push('_'); last_us = true; }
            }
            c if c.is_control() => {}
            c => { out.push(c); last_us = false; }
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("schedule") } else { out }
}
