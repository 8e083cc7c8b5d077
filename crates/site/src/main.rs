use std::time::Instant;

use anyhow::Context;
use serde_json::json;

use autolot_site::{DomSnapshot, FilterControls, GridState, Site, SiteConfig, SiteEvent};

/// Render an inventory snapshot through the filter controls and print the
/// resulting grid as JSON.
///
/// Usage: `autolot-site <snapshot.json> [controls.json]`
fn main() -> anyhow::Result<()> {
    autolot_observability::init();

    let config = match std::env::var("AUTOLOT_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read config at {path}"))?;
            SiteConfig::from_json(&raw).with_context(|| format!("invalid config at {path}"))?
        }
        Err(_) => SiteConfig::from_env(),
    };

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .context("usage: autolot-site <snapshot.json> [controls.json]")?;
    let raw = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("failed to read snapshot at {snapshot_path}"))?;
    let snapshot: DomSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("invalid snapshot at {snapshot_path}"))?;

    let controls = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read controls at {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("invalid controls at {path}"))?
        }
        None => FilterControls::cleared(),
    };

    let cards = snapshot.cards.as_ref().map_or(0, Vec::len);
    let debounce = config.filter_debounce();
    let mut site = Site::new(config, GridState::with_cards(cards));

    let now = Instant::now();
    site.dispatch(now, SiteEvent::DomReady(snapshot));
    site.dispatch(now, SiteEvent::FilterChanged(controls));
    site.tick(now + debounce);

    let Some(page) = site.inventory() else {
        tracing::warn!("snapshot has no inventory grid");
        println!("{}", json!({ "count": 0, "no_results": true, "visible": [] }));
        return Ok(());
    };

    let visible: Vec<_> = page
        .visible()
        .iter()
        .map(|(index, record)| json!({ "index": index.0, "record": record }))
        .collect();
    let grid = page.renderer();
    let out = json!({
        "count": grid.count(),
        "no_results": grid.no_results(),
        "visible": visible,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
