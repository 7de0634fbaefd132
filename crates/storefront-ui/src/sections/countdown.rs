//! Flash-deal countdown shown in the section header.

use storefront_catalog::countdown::countdown_clock;
use storefront_catalog::prelude::{DateTime, Utc};

/// Render the "Ends in" clock for the earliest deal deadline.
///
/// The clock carries the deadline as `data-deadline` so the page script can
/// keep it ticking.
pub fn render_countdown(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!(
        r#"<div class="countdown-timer" data-deadline="{}">
            <span class="timer-label">Ends in:</span>
            <span class="timer-value">{}</span>
        </div>
        "#,
        deadline.to_rfc3339(),
        countdown_clock(deadline, now)
    )
}
