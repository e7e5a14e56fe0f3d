//! WhatsApp click-to-chat links.
//!
//! Unlike the other platforms the web target is rewritten to WhatsApp Web,
//! since `wa.me` itself only redirects.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::{encode_component, query_value};

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Whatsapp,
    &["wa.me", "api.whatsapp.com", "whatsapp.com"],
    match_url,
    build,
);

/// Digits of a phone number with an optional leading `+`.
fn phone_digits(raw: &str) -> Option<String> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(digits.to_string())
    } else {
        None
    }
}

fn match_url(url: &Url) -> Option<Capture> {
    let segs = segments(url);
    let phone = if url.host_str()? == "wa.me" {
        match segs.as_slice() {
            [number] => phone_digits(number)?,
            _ => return None,
        }
    } else {
        match segs.as_slice() {
            [send] if send == "send" => phone_digits(&query_value(url, "phone")?)?,
            _ => return None,
        }
    };

    let mut groups = vec![phone];
    if let Some(text) = query_value(url, "text").filter(|t| !t.is_empty()) {
        groups.push(text);
    }
    Some(Capture::new("chat", groups))
}

fn build(_url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "chat" {
        return None;
    }
    let phone = phone_digits(capture.group(0)?)?;

    let mut query = format!("phone=+{phone}");
    if let Some(text) = capture.group(1) {
        query.push_str("&text=");
        query.push_str(&encode_component(text));
    }

    Some(DeepLinkResult::native(
        Platform::Whatsapp,
        format!("https://web.whatsapp.com/send?{query}"),
        format!("whatsapp://send?{query}"),
        Intent::new(format!("send?{query}"), "whatsapp")
            .package("com.whatsapp")
            .build(),
    ))
}
