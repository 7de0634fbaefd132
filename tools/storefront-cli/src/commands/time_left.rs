//! Time remaining until a deal deadline.

use anyhow::{Context as _, Result};
use storefront_catalog::countdown::{countdown_clock, parse_deadline, time_left};

use super::{resolve_now, TimeLeftArgs};
use crate::context::Context;

/// Run the time-left command.
pub async fn run(args: TimeLeftArgs, ctx: &Context) -> Result<()> {
    let deadline = parse_deadline(&args.deadline)
        .with_context(|| format!("Invalid deadline: {}", args.deadline))?;
    let now = resolve_now(args.now.as_deref())?;

    let label = time_left(deadline, now);
    let clock = countdown_clock(deadline, now);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "deadline": deadline.to_rfc3339(),
            "now": now.to_rfc3339(),
            "time_left": label,
            "clock": clock,
        }));
        return Ok(());
    }

    println!("{}", label);
    ctx.output.debug(&format!("deadline {} / now {} / clock {}", deadline.to_rfc3339(), now.to_rfc3339(), clock));

    Ok(())
}
