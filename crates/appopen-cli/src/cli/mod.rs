//! CLI for appopen: resolve web links to native app deep links and open them.

mod commands;

use std::sync::Arc;

use anyhow::Result;
use appopen_core::config;
use appopen_core::{Os, Resolver};
use clap::{Parser, Subcommand};

use commands::{
    run_detect_os, run_normalize, run_open, run_platforms, run_resolve, run_root_domain,
    OpenArgs,
};

/// Top-level CLI for appopen.
#[derive(Debug, Parser)]
#[command(name = "appopen")]
#[command(about = "appopen: turn web links into native app deep links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a URL to its iOS, Android and web targets.
    Resolve {
        /// Web URL (scheme optional).
        url: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical form of a URL.
    Normalize {
        url: String,
    },

    /// Print the routing key (root domain) for a hostname.
    RootDomain {
        host: String,
    },

    /// Classify a user agent as ios, android or desktop.
    DetectOs {
        /// User-agent string; omitted means a headless caller.
        #[arg(long, env = "APPOPEN_USER_AGENT")]
        user_agent: Option<String>,
    },

    /// Open a URL on a console host that prints each navigation.
    Open {
        url: String,
        /// Pretend to run on this OS (overrides --user-agent).
        #[arg(long, value_name = "OS")]
        os: Option<Os>,
        #[arg(long, env = "APPOPEN_USER_AGENT")]
        user_agent: Option<String>,
        /// Do not fall back to the web URL after a native navigation.
        #[arg(long)]
        no_fallback: bool,
        /// Fallback delay in milliseconds (default from config).
        #[arg(long, value_name = "MS")]
        delay: Option<u64>,
        /// Open web URLs in a new tab.
        #[arg(long)]
        new_tab: bool,
        /// Simulate the native app taking the foreground after MS milliseconds.
        #[arg(long, value_name = "MS")]
        hidden_after: Option<u64>,
    },

    /// List registered platforms and the root domains they own.
    Platforms,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = Resolver::new(Arc::new(cfg.registry()?));

        match cli.command {
            CliCommand::Resolve { url, json } => run_resolve(&resolver, &url, json)?,
            CliCommand::Normalize { url } => run_normalize(&url),
            CliCommand::RootDomain { host } => run_root_domain(&host),
            CliCommand::DetectOs { user_agent } => run_detect_os(user_agent.as_deref()),
            CliCommand::Open {
                url,
                os,
                user_agent,
                no_fallback,
                delay,
                new_tab,
                hidden_after,
            } => {
                let args = OpenArgs {
                    os,
                    user_agent,
                    no_fallback,
                    delay_ms: delay,
                    new_tab,
                    hidden_after_ms: hidden_after,
                };
                run_open(resolver, &cfg, &url, args).await?;
            }
            CliCommand::Platforms => run_platforms(resolver.registry()),
        }

        Ok(())
    }
}
