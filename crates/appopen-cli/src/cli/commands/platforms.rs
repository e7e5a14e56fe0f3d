//! `appopen platforms` – list handlers and the root domains they own.

use appopen_core::HandlerRegistry;

pub fn run_platforms(registry: &HandlerRegistry) {
    if registry.is_empty() {
        println!("No platforms registered.");
        return;
    }
    println!("{:<12} {}", "PLATFORM", "DOMAINS");
    for handler in registry.handlers() {
        let domains = registry.domains_for(handler.platform);
        let domains = if domains.is_empty() {
            "(shadowed)".to_string()
        } else {
            domains.join(", ")
        };
        println!("{:<12} {}", handler.platform, domains);
    }
}
