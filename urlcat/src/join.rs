/// Joins two strings using a separator.
///
/// If the separator occurs at the concatenation boundary in either of the
/// strings, it is removed (at most once per side). When either trimmed side
/// is empty the parts are concatenated directly, so a lone leading or
/// trailing separator is never produced.
///
/// ## Example
///
/// ```
/// assert_eq!(urlcat::join("first/", "/", "/second"), "first/second");
/// assert_eq!(urlcat::join("", "/", "second"), "second");
/// ```
pub fn join(part1: &str, separator: &str, part2: &str) -> String {
    let p1 = part1.strip_suffix(separator).unwrap_or(part1);
    let p2 = part2.strip_prefix(separator).unwrap_or(part2);

    if p1.is_empty() || p2.is_empty() {
        format!("{p1}{p2}")
    } else {
        format!("{p1}{separator}{p2}")
    }
}
