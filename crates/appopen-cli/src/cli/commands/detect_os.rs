//! `appopen detect-os` – classify a user agent.

use appopen_core::detect_os;

pub fn run_detect_os(user_agent: Option<&str>) {
    println!("{}", detect_os(user_agent));
}
