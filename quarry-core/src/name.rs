/// Column name of a field.
///
/// A non empty `explicit` name is returned as is. Otherwise `identifier` is turned from
/// medial capitals into lowercase words separated by underscores. A run of capitals
/// (an acronym) is kept together, its last letter opens a new word when a lowercase
/// letter follows it.
///
/// ```rust
/// use quarry_core::resolve_column_name;
/// assert_eq!(resolve_column_name("UserID", ""), "user_id");
/// assert_eq!(resolve_column_name("HTTPStatus", ""), "http_status");
/// assert_eq!(resolve_column_name("UserID", "uid"), "uid");
/// ```
pub fn resolve_column_name(identifier: &str, explicit: &str) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    let chars: Vec<char> = identifier.chars().collect();
    let mut result = String::with_capacity(identifier.len() + 4);
    for (i, c) in chars.iter().copied().enumerate() {
        if c.is_uppercase() {
            let previous = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let underscore = match previous {
                None | Some('_') => false,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                Some(_) => true,
            };
            if underscore {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::resolve_column_name;

    #[test]
    fn medial_capitals() {
        assert_eq!(resolve_column_name("UserID", ""), "user_id");
        assert_eq!(resolve_column_name("HTTPStatus", ""), "http_status");
        assert_eq!(resolve_column_name("CreatedAt", ""), "created_at");
        assert_eq!(resolve_column_name("createdAt", ""), "created_at");
        assert_eq!(resolve_column_name("ID", ""), "id");
        assert_eq!(resolve_column_name("URLPath", ""), "url_path");
    }

    #[test]
    fn already_lowercase() {
        assert_eq!(resolve_column_name("id", ""), "id");
        assert_eq!(resolve_column_name("user_id", ""), "user_id");
        assert_eq!(resolve_column_name("User_Name", ""), "user_name");
        assert_eq!(resolve_column_name("", ""), "");
    }

    #[test]
    fn explicit_wins() {
        assert_eq!(resolve_column_name("UserID", "uid"), "uid");
        assert_eq!(resolve_column_name("id", "u.id"), "u.id");
        assert_eq!(resolve_column_name("HTTPStatus", "Status"), "Status");
    }
}
