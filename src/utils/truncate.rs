/// Shorten `value` to `keep` characters plus `...` when it is longer than `max`.
pub fn truncate_with_ellipsis(value: &str, max: usize, keep: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(keep).collect();
    out.push_str("...");
    out
}
