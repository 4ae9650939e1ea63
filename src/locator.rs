//! Report-URL derivation from a structured bundle descriptor
//!
//! A VTEX IO bundle report lives at one of two URL templates depending on
//! whether the app is linked (dev) or published (prod). Building the URL is
//! pure string templating; fetching it is the caller's business.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether the app is linked (dev) or published (prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Linked app, served from the private assets route
    Dev,
    /// Published app, served from the public assets route
    Prod,
}

/// Which report flavor a published app exposes (`devReport` / `prodReport`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    /// Development build report
    Dev,
    /// Production build report
    Prod,
}

impl Env {
    fn as_str(&self) -> &'static str {
        match self {
            Env::Dev => "dev",
            Env::Prod => "prod",
        }
    }
}

/// Descriptor for one side of a comparison: where its report document lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleLocator {
    /// VTEX workspace name
    pub workspace: String,
    /// VTEX account name
    pub account: String,
    /// App name (vendor.app)
    pub app: String,
    /// App version
    pub version: String,
    /// Report flavor for published apps
    pub env: Env,
    /// Linked vs published serving route
    pub mode: Mode,
}

/// Error building a report URL
#[derive(Error, Debug)]
pub enum LocatorError {
    /// One or more descriptor fields are empty
    #[error("incomplete bundle locator: missing {}", missing.join(", "))]
    Incomplete {
        /// Names of the empty fields
        missing: Vec<&'static str>,
    },
}

impl BundleLocator {
    /// Build the report URL for this descriptor
    ///
    /// Deterministic: the same descriptor always yields the same URL.
    /// Linked apps resolve to the private `devReport.html` route; published
    /// apps resolve to the public route with the env-selected report.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_diff::locator::{BundleLocator, Env, Mode};
    ///
    /// let locator = BundleLocator {
    ///     workspace: "feature".to_string(),
    ///     account: "acme".to_string(),
    ///     app: "acme.storefront".to_string(),
    ///     version: "2.3.1".to_string(),
    ///     env: Env::Dev,
    ///     mode: Mode::Dev,
    /// };
    ///
    /// assert_eq!(
    ///     locator.report_url()?,
    ///     "https://feature--acme.myvtex.com/_v/private/assets/v1/linked/acme.storefront@2.3.1/public/react/devReport.html"
    /// );
    /// # Ok::<(), bundle_diff::locator::LocatorError>(())
    /// ```
    pub fn report_url(&self) -> Result<String, LocatorError> {
        let missing: Vec<&'static str> = [
            ("workspace", &self.workspace),
            ("account", &self.account),
            ("app", &self.app),
            ("version", &self.version),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(LocatorError::Incomplete { missing });
        }

        let url = match self.mode {
            Mode::Dev => format!(
                "https://{}--{}.myvtex.com/_v/private/assets/v1/linked/{}@{}/public/react/devReport.html",
                self.workspace, self.account, self.app, self.version
            ),
            Mode::Prod => format!(
                "https://{}--{}.myvtex.com/_v/public/assets/v1/published/{}@{}/public/react/{}Report.html",
                self.workspace,
                self.account,
                self.app,
                self.version,
                self.env.as_str()
            ),
        };

        Ok(url)
    }
}
