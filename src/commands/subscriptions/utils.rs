use std::io::Write;

use anyhow::{anyhow, Result};
use chrono::Utc;
use reqwest::Method;
use tabwriter::TabWriter;
use thiserror::Error;

use super::types::Subscription;
use crate::state::http::types::Envelope;
use crate::state::http::{RequestContext, Transport, TransportError};
use crate::utils::relative_time;

pub const USER_SUBSCRIPTIONS_PATH: &str = "/user/subscriptions";

#[derive(Error, Debug)]
pub enum SubscriptionsError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("error unmarshalling the JSON response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Lists every subscription of the current user, in the order the API returns them.
///
/// Only the first page is read, the endpoint is not paginated by this client.
pub async fn fetch_user_subscriptions<T>(
    http: &T,
    ctx: &RequestContext,
) -> Result<Vec<Subscription>, SubscriptionsError>
where
    T: Transport + ?Sized,
{
    let body = http
        .do_request(ctx, Method::GET, USER_SUBSCRIPTIONS_PATH, None)
        .await?;

    let envelope = serde_json::from_slice::<Envelope<Subscription>>(&body)
        .map_err(SubscriptionsError::Decode)?;

    log::debug!("Fetched {} subscriptions", envelope.result.len());

    Ok(envelope.result)
}

pub fn format_subscriptions(subscriptions: &[Subscription], title: bool) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "ID\tPRODUCT\tPLAN\tSTATE\tPRICE\tFREQUENCY\tRENEWS")?;
    }

    for subscription in subscriptions {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            subscription.id,
            display_or_dash(&subscription.product.public_name),
            display_or_dash(&subscription.rate_plan.public_name),
            display_or_dash(&subscription.state),
            format_price(subscription.price, &subscription.currency),
            display_or_dash(&subscription.frequency),
            format_renewal(subscription),
        )?;
    }

    let table = tw
        .into_inner()
        .map_err(|_| anyhow!("Failed to flush the table"))?;

    Ok(String::from_utf8(table)?
        .lines()
        .map(std::string::ToString::to_string)
        .collect())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn format_price(price: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{price:.2}")
    } else {
        format!("{price:.2} {currency}")
    }
}

fn format_renewal(subscription: &Subscription) -> String {
    let Some(end) = subscription.current_period_end else {
        return "-".to_string();
    };

    let when = if end > Utc::now() {
        format!("in {}", relative_time(end))
    } else {
        format!("{} ago", relative_time(end))
    };

    if subscription.cancel_at_period_end {
        format!("ends {when}")
    } else {
        when
    }
}
