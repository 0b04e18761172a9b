//! Static export: every registered route written as `index.html`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SiteError};
use crate::site::SiteRegistry;

/// Path of the not-found document at the export root.
pub const NOT_FOUND_FILE: &str = "404.html";

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
    pub bytes: usize,
    pub elapsed_ms: u128,
}

/// `/` -> `<out>/index.html`, `/a/b` -> `<out>/a/b/index.html`.
pub fn output_path(out_dir: &Path, route: &str) -> PathBuf {
    let relative = route.trim_matches('/');
    if relative.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(relative).join("index.html")
    }
}

fn write_file(path: &Path, html: &str) -> Result<usize> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(path, html).map_err(|e| SiteError::io(path, e))?;
    debug!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(html.len())
}

/// Render every route in parallel and write the documents under `out_dir`.
/// The first failure aborts the export.
pub fn export_site(site: &SiteRegistry, out_dir: &Path) -> Result<ExportReport> {
    let start = Instant::now();
    info!("Exporting {} routes to {}", site.routes().len(), out_dir.display());

    let written = site
        .routes()
        .par_iter()
        .map(|route| {
            let html = site.render(route)?;
            let path = output_path(out_dir, route);
            let bytes = write_file(&path, &html)?;
            Ok((path, bytes))
        })
        .collect::<Result<Vec<_>>>()?;

    let not_found_path = out_dir.join(NOT_FOUND_FILE);
    let not_found_bytes = write_file(&not_found_path, &site.render_not_found("/404")?)?;

    let bytes = written.iter().map(|(_, b)| b).sum::<usize>() + not_found_bytes;
    let mut files: Vec<PathBuf> = written.into_iter().map(|(p, _)| p).collect();
    files.push(not_found_path);

    let elapsed_ms = start.elapsed().as_millis();
    info!("Exported {} files ({} bytes) in {} ms", files.len(), bytes, elapsed_ms);

    Ok(ExportReport {
        files,
        bytes,
        elapsed_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let out = Path::new("dist");
        assert_eq!(output_path(out, "/"), PathBuf::from("dist/index.html"));
        assert_eq!(
            output_path(out, "/therapies/tcc"),
            PathBuf::from("dist/therapies/tcc/index.html")
        );
    }

    #[test]
    fn test_export_writes_every_route() {
        let out = std::env::temp_dir().join(format!("empc_export_{}", std::process::id()));
        let site = SiteRegistry::new();
        let report = export_site(&site, &out).unwrap();

        assert_eq!(report.files.len(), site.routes().len() + 1);
        assert!(out.join("index.html").exists());
        assert!(out.join("groupal/mbct/index.html").exists());
        assert!(out.join(NOT_FOUND_FILE).exists());
        let tarifs = fs::read_to_string(out.join("tarifs/index.html")).unwrap();
        assert!(tarifs.contains("<!DOCTYPE html>"));

        // No widget endpoint on a static host: every answer ships in the page.
        let gestalt = fs::read_to_string(out.join("therapies/gestalt/index.html")).unwrap();
        assert!(gestalt.contains("intégrant pensées, émotions, sensations corporelles et contexte relationnel"));
        assert!(gestalt.contains("class=\"faq-answer\""));

        fs::remove_dir_all(&out).unwrap();
    }
}
