//! Canonical URL form used as the routing and matching input.

use url::{Host, Url};

/// Hostname labels stripped from the front of every host.
const STRIPPED_LABELS: [&str; 2] = ["www.", "m."];

/// Query keys with this prefix are tracking parameters and always dropped.
const TRACKING_PREFIX: &str = "utm_";

/// Canonicalizes a raw, user-supplied URL.
///
/// - Trims whitespace and prepends `https://` when no `http://`/`https://`
///   prefix is present.
/// - Strips every leading `www.` / `m.` host label (`www.m.youtube.com` →
///   `youtube.com`).
/// - Drops every query parameter whose key starts with `utm_`, keeping the
///   remaining parameters in their original order.
/// - Drops trailing slashes from the path unless the path is exactly `/`.
///
/// Never fails: input that does not parse is returned trimmed and
/// scheme-prefixed. Applying `normalize` to its own output is a no-op.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let mut url = match Url::parse(&with_scheme) {
        Ok(u) => u,
        Err(e) => {
            tracing::trace!("normalize: keeping literal {:?} ({})", with_scheme, e);
            return with_scheme;
        }
    };

    strip_mobile_and_www(&mut url);
    strip_tracking_params(&mut url);
    strip_trailing_slashes(&mut url);

    url.into()
}

fn strip_mobile_and_www(url: &mut Url) {
    let host = match url.host() {
        Some(Host::Domain(d)) => d.to_string(),
        _ => return,
    };

    let mut rest = host.as_str();
    loop {
        let next = STRIPPED_LABELS.iter().find_map(|label| {
            let head = rest.get(..label.len())?;
            if head.eq_ignore_ascii_case(label) && rest.len() > label.len() {
                Some(&rest[label.len()..])
            } else {
                None
            }
        });
        match next {
            Some(r) => rest = r,
            None => break,
        }
    }

    if rest.len() != host.len() {
        let stripped = rest.to_string();
        if let Err(e) = url.set_host(Some(&stripped)) {
            tracing::debug!("normalize: cannot set host {:?}: {}", stripped, e);
        }
    }
}

fn strip_tracking_params(url: &mut Url) {
    if url.query().is_none() {
        return;
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let kept: Vec<&(String, String)> = pairs
        .iter()
        .filter(|(k, _)| !k.starts_with(TRACKING_PREFIX))
        .collect();

    // Leave the original encoding alone when nothing was removed.
    if kept.len() == pairs.len() {
        return;
    }

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
}

fn strip_trailing_slashes(url: &mut Url) {
    let path = url.path();
    if path == "/" || !path.ends_with('/') {
        return;
    }
    let trimmed = path.trim_end_matches('/');
    let new_path = if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    };
    url.set_path(&new_path);
}
