use anyhow::{Context, Result};
use clap::Parser;

use super::utils::{fetch_user_subscriptions, format_subscriptions};
use crate::state::http::RequestContext;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all subscriptions of the current user")]
#[group(skip)]
pub struct Options {
    #[clap(long, help = "Print the subscriptions as JSON", conflicts_with = "quiet")]
    pub json: bool,

    #[clap(short, long, help = "Only print the IDs of the subscriptions")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let ctx = state.ctx.clone();

    ctrlc::set_handler(move || {
        if interrupt(&ctx) {
            std::process::exit(130);
        }
    })
    .ok();

    let subscriptions = fetch_user_subscriptions(&state.http, &state.ctx)
        .await
        .context("Failed to fetch subscriptions")?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&subscriptions)?);

        return Ok(());
    }

    if options.quiet {
        let ids = subscriptions
            .iter()
            .map(|subscription| subscription.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");

        return Ok(());
    }

    if subscriptions.is_empty() {
        log::info!("No subscriptions found");

        return Ok(());
    }

    let list = format_subscriptions(&subscriptions, true)?;

    println!("{}", list.join("\n"));

    Ok(())
}

/// Cancels the request on the first ctrl-c, returns true when the process should exit.
fn interrupt(ctx: &RequestContext) -> bool {
    if ctx.is_cancelled() {
        return true;
    }

    log::debug!("Cancelling request");
    ctx.cancel();

    false
}
