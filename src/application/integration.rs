/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{INTEGRATION_PATH, INTEGRATION_PROVIDER_PARAM};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Third-party services the server can connect an account to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationProvider {
    /// Google Calendar
    GoogleCalendar,
    /// Outlook / Microsoft 365 calendar
    OutlookCalendar,
    /// Salesforce CRM
    Salesforce,
    /// HubSpot CRM
    Hubspot,
    /// Attio CRM
    Attio,
    /// Notion workspace
    Notion,
}

impl IntegrationProvider {
    /// Every known provider
    pub const ALL: [IntegrationProvider; 6] = [
        IntegrationProvider::GoogleCalendar,
        IntegrationProvider::OutlookCalendar,
        IntegrationProvider::Salesforce,
        IntegrationProvider::Hubspot,
        IntegrationProvider::Attio,
        IntegrationProvider::Notion,
    ];

    /// Wire identifier sent as the `provider` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IntegrationProvider::GoogleCalendar => "google-calendar",
            IntegrationProvider::OutlookCalendar => "outlook-calendar",
            IntegrationProvider::Salesforce => "salesforce",
            IntegrationProvider::Hubspot => "hubspot",
            IntegrationProvider::Attio => "attio",
            IntegrationProvider::Notion => "notion",
        }
    }
}

impl fmt::Display for IntegrationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntegrationProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntegrationProvider::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown integration provider: {s}")))
    }
}

/// Builds the URL that starts the integration flow for `provider`
///
/// The integration path is absolute, so any path already on `base_url` is
/// replaced: `http://localhost:1234` gives
/// `http://localhost:1234/integration?provider=salesforce`.
#[must_use]
pub fn get_integration_url(base_url: &Url, provider: IntegrationProvider) -> String {
    let mut url = base_url.clone();
    url.set_path(INTEGRATION_PATH);
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(INTEGRATION_PROVIDER_PARAM, provider.as_str());
    url.to_string()
}
