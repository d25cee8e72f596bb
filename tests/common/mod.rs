//! Shared utilities for integration tests.

use bank_dashboard::app::Document;
use bank_dashboard::config::AppConfig;
use bank_dashboard::lifecycle::{bootstrap, Bootstrapped};

/// Bootstrap the default configuration at `url` against a fresh `#app`.
pub fn boot(url: &str) -> (Bootstrapped, Document) {
    boot_with(&AppConfig::default(), url)
}

/// Bootstrap `config` at `url` against a fresh document holding its mount point.
#[allow(dead_code)]
pub fn boot_with(config: &AppConfig, url: &str) -> (Bootstrapped, Document) {
    let id = config.mount.selector.trim_start_matches('#');
    let mut document = Document::with_element(id);
    let booted = bootstrap(config, url, &mut document).unwrap();
    (booted, document)
}

/// Markup currently attached to `#app`.
#[allow(dead_code)]
pub fn mounted_html(document: &Document) -> String {
    document
        .query_selector("#app")
        .map(|element| element.inner_html().to_string())
        .unwrap_or_default()
}
