//! Url command implementation
//!
//! Handles the `bundle-diff url` command which derives a report URL from a
//! bundle descriptor. Run it once per side of a comparison, then feed the
//! saved documents to `bundle-diff compare`.

use anyhow::Result;
use console::style;

use crate::error::BundleDiffError;
use crate::locator::BundleLocator;

/// Derive and print the report URL for a bundle descriptor
///
/// # Errors
///
/// Returns an error if any descriptor field is empty.
pub fn cmd_url(locator: &BundleLocator) -> Result<()> {
    let url = locator.report_url().map_err(BundleDiffError::from)?;

    log::debug!("derived report URL for {}@{}", locator.app, locator.version);
    println!("{}", style(url).cyan());

    Ok(())
}
