//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Minutes as `HHh MMm`, e.g. `02h 25m`. Negative values keep a leading `-`.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// A horizontal rule made of `sep`, `width` characters long.
pub fn separator(sep: &str, width: usize) -> String {
    let c = sep.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
