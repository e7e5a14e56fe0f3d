//! `appopen resolve` – print the deep link result for a URL.

use anyhow::Result;
use appopen_core::{DeepLinkResult, Resolver};

pub fn run_resolve(resolver: &Resolver, url: &str, json: bool) -> Result<()> {
    let result = resolver.generate_deep_link(url);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&result));
    }
    Ok(())
}

fn render(r: &DeepLinkResult) -> String {
    let dash = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".to_string());
    format!(
        "{:<10} {}\n{:<10} {}\n{:<10} {}\n{:<10} {}\n",
        "platform",
        r.platform,
        "web",
        r.web_url,
        "ios",
        dash(&r.ios),
        "android",
        dash(&r.android)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_unknown_uses_dashes() {
        let out = render(&DeepLinkResult::unknown("https://example.com/"));
        assert_eq!(
            out,
            "platform   unknown\nweb        https://example.com/\nios        -\nandroid    -\n"
        );
    }
}
