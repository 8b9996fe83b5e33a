//! Home page commands

use std::time::Instant;

use biterec_core::StatsView;
use biterec_domain::Result as DomainResult;

use super::finish;
use crate::context::AppContext;

/// Everything the home hero needs: the profile pill plus list counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub profile_label: String,
    pub initials: String,
    pub default_zip: String,
    pub stats: StatsView,
}

/// Load the home view for the active profile.
pub async fn get_home_view(ctx: &AppContext) -> Result<HomeView, String> {
    let start = Instant::now();
    let result: DomainResult<HomeView> = async {
        let stats = ctx.stats.load(None).await?;
        let state = ctx.profiles.get_profile_state();
        Ok(HomeView {
            profile_label: state.label().to_string(),
            initials: state.initials,
            default_zip: state.default_zip,
            stats,
        })
    }
    .await;
    finish("home::get_home_view", start, result)
}
