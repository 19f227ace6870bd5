//! Order-insensitive query string comparison.

use reqwest::Url;

/// Query parameters of `url`, sorted by name.
///
/// Returns `None` when the URL has no query component at all, and
/// `Some(vec![])` for an empty query (`http://host/path?`). Names and values
/// are percent-decoded as URL components, so `+` stays a literal plus rather
/// than a space. The sort is stable, so repeated names keep their relative
/// order.
pub fn sorted_query_items(url: &Url) -> Option<Vec<(String, String)>> {
    let query = url.query()?;
    let mut items: Vec<(String, String)> = query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(name), decode_component(value))
        })
        .collect();
    items.sort_by(|a, b| a.0.cmp(&b.0));
    Some(items)
}

/// Percent-decode one name or value. Escapes that are not valid UTF-8 are
/// compared as written.
fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Both URLs carry a query and their sorted items are equal.
///
/// A missing query on either side is a mismatch, never a vacuous match.
pub fn query_matches(recorded: &Url, incoming: &Url) -> bool {
    match (sorted_query_items(recorded), sorted_query_items(incoming)) {
        (Some(recorded), Some(incoming)) => recorded == incoming,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_sorted_query_items() {
        let items = sorted_query_items(&url("http://api.test1.com/path?three=4&one=two")).unwrap();
        assert_eq!(
            items,
            vec![
                ("one".to_string(), "two".to_string()),
                ("three".to_string(), "4".to_string())
            ]
        );
    }

    #[test]
    fn test_no_query_is_none_empty_query_is_empty() {
        assert!(sorted_query_items(&url("http://api.test1.com/path")).is_none());
        assert_eq!(
            sorted_query_items(&url("http://api.test1.com/path?")),
            Some(vec![])
        );
    }

    #[test]
    fn test_percent_decoding() {
        let items = sorted_query_items(&url("http://api.test1.com/?q=hello%20world")).unwrap();
        assert_eq!(items, vec![("q".to_string(), "hello world".to_string())]);
    }

    #[test]
    fn test_plus_is_not_a_space() {
        let items = sorted_query_items(&url("http://api.test1.com/?q=a+b")).unwrap();
        assert_eq!(items, vec![("q".to_string(), "a+b".to_string())]);

        assert!(!query_matches(
            &url("http://api.test1.com/?q=a+b"),
            &url("http://api.test1.com/?q=a%20b")
        ));
        assert!(query_matches(
            &url("http://api.test1.com/?q=a%2Bb"),
            &url("http://api.test1.com/?q=a+b")
        ));
    }

    #[test]
    fn test_name_without_value_and_empty_segments() {
        let items = sorted_query_items(&url("http://api.test1.com/?flag&&b=%C3%A9")).unwrap();
        assert_eq!(
            items,
            vec![
                ("b".to_string(), "\u{e9}".to_string()),
                ("flag".to_string(), String::new())
            ]
        );
    }

    #[test]
    fn test_query_matches_order_independent() {
        assert!(query_matches(
            &url("http://api.test1.com/path?one=two&three=4"),
            &url("http://api.test1.com/path?three=4&one=two"),
        ));
    }

    #[test]
    fn test_query_extra_or_missing_pair() {
        let recorded = url("http://api.test1.com/path?one=two&three=4");
        assert!(!query_matches(
            &recorded,
            &url("http://api.test1.com/path?one=two&three=4&five=6")
        ));
        assert!(!query_matches(&recorded, &url("http://api.test1.com/path?one=two")));
        assert!(!query_matches(&recorded, &url("http://api.test1.com/path?one=2&three=4")));
    }

    #[test]
    fn test_absent_query_never_matches() {
        assert!(!query_matches(
            &url("http://api.test1.com/path"),
            &url("http://api.test1.com/path")
        ));
        assert!(!query_matches(
            &url("http://api.test1.com/path?one=two"),
            &url("http://api.test1.com/path")
        ));
        assert!(query_matches(
            &url("http://api.test1.com/path?"),
            &url("http://api.test1.com/other?")
        ));
    }
}
