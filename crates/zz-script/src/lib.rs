//! Injectable JavaScript payload builders.
//!
//! Pure string construction; the embedding host decides when and where the
//! payloads run. Whitespace between statements is not part of the contract,
//! so callers should match on structure, not bytes.

use zz_core::EngineError;
use zz_core::EngineResult;

/// Rewrites `document.cookie` entries with `secure; samesite=lax` when the
/// page is served over HTTPS. Used on legacy toolkits that cannot take a
/// CSP meta tag.
const SECURE_COOKIE_SCRIPT: &str = r#"(function() {
  document.cookie = document.cookie.split('; ').map(function(c) {
    var name = c.split('=')[0];
    var value = c.split('=').slice(1).join('=');
    if (document.location.protocol === 'https:') {
      return name + '=' + value + ';secure;samesite=lax';
    }
    return c;
  }).join('; ');
})();"#;

/// Builds the tracker-blocking payload: wraps `window.fetch` and
/// `XMLHttpRequest.prototype.open`, rejecting any request whose URL
/// contains one of `domains` as a substring.
///
/// The domain list is embedded single-quoted and unescaped, so entries
/// that could break out of a string literal (`'`, `\`, control
/// characters) are rejected here rather than emitted as broken script.
pub fn tracker_blocking_script(domains: &[String]) -> EngineResult<String> {
    let list = render_domain_list(domains)?;

    Ok(format!(
        r#"(function() {{
  const blockedDomains = [{list}];
  const originalFetch = window.fetch;
  const originalXHR = window.XMLHttpRequest.prototype.open;
  window.fetch = function(url, options) {{
    if (shouldBlockRequest(url)) {{
      console.log('[ZikZak Security] Blocked fetch request to ' + url);
      return Promise.reject(new Error('Request blocked by ZikZak Security'));
    }}
    return originalFetch.apply(this, arguments);
  }};
  window.XMLHttpRequest.prototype.open = function(method, url) {{
    if (shouldBlockRequest(url)) {{
      console.log('[ZikZak Security] Blocked XHR request to ' + url);
      throw new Error('Request blocked by ZikZak Security');
    }}
    return originalXHR.apply(this, arguments);
  }};
  function shouldBlockRequest(url) {{
    const urlString = url.toString();
    return blockedDomains.some(domain => urlString.includes(domain));
  }}
}})();"#
    ))
}

/// Builds the CSP meta-injection payload: appends a
/// `meta[http-equiv="Content-Security-Policy"]` element carrying `csp` to
/// `document.head`. The CSP value is interpolated unescaped; the values
/// this engine produces contain single quotes only inside CSP keywords
/// (`'self'`, `'none'`, ...), which browsers tolerate in `content`.
pub fn csp_meta_script(csp: &str) -> String {
    format!(
        r#"(function() {{
  var meta = document.createElement('meta');
  meta.httpEquiv = 'Content-Security-Policy';
  meta.content = '{csp}';
  document.head.appendChild(meta);
}})();"#
    )
}

/// The legacy secure-cookie payload.
pub fn secure_cookie_script() -> String {
    SECURE_COOKIE_SCRIPT.to_owned()
}

fn render_domain_list(domains: &[String]) -> EngineResult<String> {
    for domain in domains {
        if domain.contains('\'') || domain.contains('\\') || domain.chars().any(char::is_control) {
            return Err(EngineError::new(
                "script.tracker_domain_invalid",
                format!("tracker domain {domain:?} cannot be embedded in a script literal"),
            ));
        }
    }

    Ok(domains
        .iter()
        .map(|domain| format!("'{domain}'"))
        .collect::<Vec<_>>()
        .join(","))
}
