// Static export of every page.
//
// Usage: cargo run --release --bin export_site [OUT_DIR]
// OUT_DIR defaults to $EXPORT_DIR, then `dist`.

use std::path::PathBuf;

use empc_site::{export_site, SiteConfig, SiteRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "empc_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or(config.export_dir);

    let site = SiteRegistry::new();
    let report = export_site(&site, &out_dir)?;

    println!(
        "Exported {} files ({:.1} KiB) to {} in {} ms",
        report.files.len(),
        report.bytes as f64 / 1024.0,
        out_dir.display(),
        report.elapsed_ms
    );
    Ok(())
}
