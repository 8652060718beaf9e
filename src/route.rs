pub type PostId = i64;

/// Sentinel for "no valid identifier present"; suppresses network activity.
pub const INVALID_POST_ID: PostId = -1;

/// A raw route parameter is only an identifier when it parses as a
/// non-negative base-10 integer.
pub fn parse_post_id(raw: &str) -> PostId {
    match raw.parse::<PostId>() {
        Ok(id) if id >= 0 => id,
        _ => INVALID_POST_ID,
    }
}

pub fn post_id_from_path(path: &str) -> PostId {
    match path.strip_prefix(crate::EDIT_POST_ROUTE_PREFIX) {
        Some(rest) => parse_post_id(rest.trim_end_matches('/')),
        None => INVALID_POST_ID,
    }
}
