//! Cheap host-keying for policy lookup.

/// Extracts the host key used to index the policy store.
///
/// Strips one leading `http://` or `https://` (case-insensitive), one
/// leading `www.`, and everything from the first `/`. This is a keying
/// function, not a URL parser: it never validates, never lowercases, and
/// never errors. Weird input yields a weird key; empty input yields `""`.
pub fn host_key(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let without_scheme = strip_scheme(url);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);

    let host = match without_www.find('/') {
        Some(slash) => &without_www[..slash],
        None => without_www,
    };

    host.to_owned()
}

fn strip_scheme(url: &str) -> &str {
    let bytes = url.as_bytes();
    for scheme in ["https://", "http://"] {
        let len = scheme.len();
        if bytes.len() >= len && bytes[..len].eq_ignore_ascii_case(scheme.as_bytes()) {
            // A matched prefix is pure ASCII, so `len` is a char boundary.
            return &url[len..];
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::host_key;

    #[test]
    fn strips_scheme_www_and_path() {
        assert_eq!(host_key("https://www.example.com/path?x=1"), "example.com");
        assert_eq!(host_key("http://example.com/"), "example.com");
        assert_eq!(host_key("example.com/path"), "example.com");
    }

    #[test]
    fn empty_input_yields_empty_key() {
        assert_eq!(host_key(""), "");
        assert_eq!(host_key("https://"), "");
        assert_eq!(host_key("https://www."), "");
    }

    #[test]
    fn scheme_strip_is_case_insensitive() {
        assert_eq!(host_key("HTTPS://example.com/x"), "example.com");
        assert_eq!(host_key("Http://www.example.com"), "example.com");
    }

    #[test]
    fn strips_at_most_one_scheme_and_one_www() {
        assert_eq!(host_key("https://https://a.test/x"), "https:");
        assert_eq!(host_key("www.www.example.com"), "www.example.com");
    }

    #[test]
    fn does_not_lowercase_or_validate() {
        assert_eq!(host_key("https://Example.COM/x"), "Example.COM");
        assert_eq!(host_key("not a url at all"), "not a url at all");
        assert_eq!(host_key("héllo.example/x"), "héllo.example");
    }

    #[test]
    fn key_never_contains_scheme_www_prefix_or_slash() {
        let inputs = [
            "https://www.example.com/a/b/c",
            "http://a.test",
            "ftp://odd.example/x",
            "//protocol-relative.example/x",
            "https:/half.example/x",
            "",
        ];
        for input in inputs {
            let key = host_key(input);
            assert!(!key.contains('/'), "input {input:?} gave key {key:?}");
            assert!(!key.starts_with("http://"), "input {input:?}");
            assert!(!key.starts_with("https://"), "input {input:?}");
            assert!(!key.starts_with("www."), "input {input:?}");
        }
    }
}
