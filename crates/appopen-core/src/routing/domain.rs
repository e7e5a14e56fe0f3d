/// Routing key for a hostname: its registrable root domain.
///
/// - Three labels when the host has at least three, the last is two
///   characters long and the one before it at most four (`example.co.uk`,
///   `shop.com.au`).
/// - Otherwise the last two labels.
/// - Single-label hosts (`localhost`) are returned unchanged.
///
/// The short second-level threshold keeps `m.twitch.tv` keyed as
/// `twitch.tv`. Hosts like `company.zoom.us` do trip the three-label rule.
pub fn root_domain(hostname: &str) -> String {
    let labels: Vec<&str> = hostname.split('.').collect();
    let n = labels.len();

    if n >= 3 && labels[n - 1].len() == 2 && labels[n - 2].len() <= 4 {
        labels[n - 3..].join(".")
    } else if n >= 2 {
        labels[n - 2..].join(".")
    } else {
        hostname.to_string()
    }
}
