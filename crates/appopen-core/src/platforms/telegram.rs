//! Telegram public usernames, channel posts, invite links and sticker sets.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Telegram,
    &["t.me", "telegram.me"],
    match_url,
    build,
);

const RESERVED: [&str; 8] = [
    "share",
    "proxy",
    "socks",
    "iv",
    "login",
    "setlanguage",
    "addtheme",
    "confirmphone",
];

fn match_url(url: &Url) -> Option<Capture> {
    let segs = segments(url);
    let capture = match segs.as_slice() {
        [first, ..] if RESERVED.contains(&first.as_str()) => return None,
        [join, hash] if join == "joinchat" => Capture::new("join", vec![hash.clone()]),
        [invite] if invite.len() > 1 && invite.starts_with('+') => {
            Capture::new("join", vec![invite[1..].to_string()])
        }
        [stickers, set] if stickers == "addstickers" => {
            Capture::new("stickers", vec![set.clone()])
        }
        // `t.me/s/NAME` is the web preview of a channel.
        [s, name] if s == "s" => Capture::new("resolve", vec![name.clone()]),
        [name, post] if post.chars().all(|c| c.is_ascii_digit()) => {
            Capture::new("post", vec![name.clone(), post.clone()])
        }
        [name] => Capture::new("resolve", vec![name.clone()]),
        _ => return None,
    };
    Some(capture)
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    let enc = |i: usize| capture.group(i).map(encode_component);
    let target = match capture.kind() {
        "resolve" => format!("resolve?domain={}", enc(0)?),
        "post" => format!("resolve?domain={}&post={}", enc(0)?, enc(1)?),
        "join" => format!("join?invite={}", enc(0)?),
        "stickers" => format!("addstickers?set={}", enc(0)?),
        _ => return None,
    };

    Some(DeepLinkResult::native(
        Platform::Telegram,
        url.as_str(),
        format!("tg://{target}"),
        Intent::new(target, "tg").build(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(s: &str) -> Option<DeepLinkResult> {
        let url = Url::parse(s).unwrap();
        build(&url, &match_url(&url)?)
    }

    #[test]
    fn username() {
        let r = resolve("https://t.me/kishandev2509").unwrap();
        assert_eq!(r.ios.as_deref(), Some("tg://resolve?domain=kishandev2509"));
        assert_eq!(
            r.android.as_deref(),
            Some("intent://resolve?domain=kishandev2509#Intent;scheme=tg;end")
        );
    }

    #[test]
    fn channel_post_and_preview() {
        let r = resolve("https://t.me/durov/42").unwrap();
        assert_eq!(r.ios.as_deref(), Some("tg://resolve?domain=durov&post=42"));
        let r = resolve("https://t.me/s/durov").unwrap();
        assert_eq!(r.ios.as_deref(), Some("tg://resolve?domain=durov"));
    }

    #[test]
    fn invites_and_stickers() {
        let r = resolve("https://t.me/+AbCdEf123").unwrap();
        assert_eq!(r.ios.as_deref(), Some("tg://join?invite=AbCdEf123"));
        let r = resolve("https://t.me/joinchat/AbCdEf123").unwrap();
        assert_eq!(r.ios.as_deref(), Some("tg://join?invite=AbCdEf123"));
        let r = resolve("https://t.me/addstickers/Animals").unwrap();
        assert_eq!(r.ios.as_deref(), Some("tg://addstickers?set=Animals"));
    }

    #[test]
    fn share_page_rejected() {
        assert!(resolve("https://t.me/share/url").is_none());
        assert!(resolve("https://t.me/").is_none());
    }
}
