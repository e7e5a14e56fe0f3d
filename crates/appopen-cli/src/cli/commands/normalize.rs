//! `appopen normalize` – print the canonical URL.

use appopen_core::normalize;

pub fn run_normalize(url: &str) {
    println!("{}", normalize(url));
}
