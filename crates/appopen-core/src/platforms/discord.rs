//! Discord invites and channel links.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Discord,
    &["discord.com", "discord.gg", "discordapp.com"],
    match_url,
    build,
);

const PACKAGE: &str = "com.discord";

fn match_url(url: &Url) -> Option<Capture> {
    let segs = segments(url);
    if url.host_str()? == "discord.gg" {
        return match segs.as_slice() {
            [code] => Some(Capture::new("invite", vec![code.clone()])),
            _ => None,
        };
    }
    match segs.as_slice() {
        [invite, code] if invite == "invite" => Some(Capture::new("invite", vec![code.clone()])),
        [channels, rest @ ..] if channels == "channels" && (1..=3).contains(&rest.len()) => {
            Some(Capture::new("channel", rest.to_vec()))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    let (ios, target) = match capture.kind() {
        "invite" => {
            let code = encode_component(capture.group(0)?);
            (
                format!("discord://invite/{code}"),
                format!("discord.gg/{code}"),
            )
        }
        "channel" => {
            if capture.groups().is_empty() {
                return None;
            }
            let path = capture
                .groups()
                .iter()
                .map(|g| encode_component(g))
                .collect::<Vec<_>>()
                .join("/");
            (
                format!("discord://channels/{path}"),
                format!("discord.com/channels/{path}"),
            )
        }
        _ => return None,
    };

    Some(DeepLinkResult::native(
        Platform::Discord,
        url.as_str(),
        ios,
        Intent::new(target, "discord").package(PACKAGE).build(),
    ))
}
