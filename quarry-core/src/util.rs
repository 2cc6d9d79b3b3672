/// Writes each value through `f`, putting `separator` between values that produced output.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// First entry of a comma separated table list, trimmed.
///
/// An alias is kept as part of the entry (`users u`), entities read from aliased lists
/// have to name their columns with the qualifier (`#[quarry(name = "u.name")]`).
pub fn first_table(tables: &str) -> &str {
    tables.split(',').next().unwrap_or_default().trim()
}

/// Largest char boundary of `value` not past `len`.
pub fn char_boundary(value: &str, len: usize) -> usize {
    if len >= value.len() {
        return value.len();
    }
    (0..=len)
        .rev()
        .find(|i| value.is_char_boundary(*i))
        .unwrap_or(0)
}

/// Shortens long queries so that they fit in a log line or an error context.
#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {{
        let query: &str = &$query;
        let end = $crate::char_boundary(query, 497);
        format!(
            "{}{}",
            query[..end].trim_end(),
            if end < query.len() { "..." } else { "" },
        )
    }};
}
