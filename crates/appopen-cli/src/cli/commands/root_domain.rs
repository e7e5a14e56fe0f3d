//! `appopen root-domain` – print the registry key for a hostname.

use appopen_core::root_domain;

pub fn run_root_domain(host: &str) {
    println!("{}", root_domain(&host.trim().to_ascii_lowercase()));
}
