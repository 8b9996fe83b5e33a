//! BiteRec - restaurant tracking client
//!
//! Smoke entry point: builds the application context, subscribes to
//! profile-change notifications, and logs a snapshot of the active
//! profile and its list counts.

use biterec_app::commands::home;
use biterec_app::utils::logging::init_tracing;
use biterec_app::AppContext;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let ctx = AppContext::new().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    // Keep the guard alive for the process lifetime; dropping it would
    // unsubscribe.
    let _profile_watch = ctx.events.subscribe(|state| {
        info!(profile_id = %state.profile_id, label = %state.label(), "active profile changed");
    });

    match home::get_home_view(&ctx).await {
        Ok(view) => info!(
            profile = %view.profile_label,
            initials = %view.initials,
            zip = %view.default_zip,
            saved = view.stats.saved,
            tried = view.stats.tried,
            to_try = view.stats.to_try,
            favorites = view.stats.favorites,
            "home snapshot"
        ),
        Err(message) => error!(%message, "could not load home snapshot"),
    }

    Ok(())
}
