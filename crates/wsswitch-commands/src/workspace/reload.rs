//! `wsswitch reload` — fire the refresh signal so every view re-renders.

use anyhow::Result;
use std::io;

use wsswitch_core::discovery::{FsDiscovery, FsListing};
use wsswitch_core::events::SubscriptionId;
use wsswitch_core::tree::TreeDataProvider;

use super::tree::{expand, render_text};
use crate::context::AppContext;

/// Subscribe a tree view that re-renders to stdout on every refresh.
pub fn subscribe_tree_view(ctx: &mut AppContext) -> SubscriptionId {
    let roots = ctx.roots.clone();
    let mode = ctx.mode;
    ctx.refresh.subscribe(move || {
        let provider = TreeDataProvider::new(&roots, mode, &FsDiscovery, &FsListing);
        let views = expand(&provider, None, None);
        if let Err(e) = render_text(&views, &mut io::stdout().lock()) {
            tracing::warn!(error = %e, "Failed to render workspace tree");
        }
    })
}

/// `wsswitch reload`
pub fn cmd_reload(ctx: &mut AppContext) -> Result<()> {
    if ctx.refresh.is_empty() {
        subscribe_tree_view(ctx);
    }
    ctx.notify_changed();
    Ok(())
}
