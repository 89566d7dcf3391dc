use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Companies with a bundled question table.
///
/// The set is fixed: each variant maps to one CSV file shipped in the data
/// directory, so there is no open-ended company lookup anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Company {
    Amazon,
    Adobe,
    Google,
    Microsoft,
    Ibm,
    Facebook,
    Apple,
    GoldmanSachs,
    Flipkart,
    Uber,
    JpmorganChase,
}

impl Company {
    /// Every supported company, in the order shown in selectors.
    pub const ALL: [Company; 11] = [
        Company::Amazon,
        Company::Adobe,
        Company::Google,
        Company::Microsoft,
        Company::Ibm,
        Company::Facebook,
        Company::Apple,
        Company::GoldmanSachs,
        Company::Flipkart,
        Company::Uber,
        Company::JpmorganChase,
    ];

    /// Human-readable label, also used as the selector value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Company::Amazon => "Amazon",
            Company::Adobe => "Adobe",
            Company::Google => "Google",
            Company::Microsoft => "Microsoft",
            Company::Ibm => "IBM",
            Company::Facebook => "Facebook",
            Company::Apple => "Apple",
            Company::GoldmanSachs => "Goldman Sachs",
            Company::Flipkart => "Flipkart",
            Company::Uber => "Uber",
            Company::JpmorganChase => "JPMorgan Chase",
        }
    }

    /// File name of the backing question table inside the data directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Company::Amazon => "amazon_alltime.csv",
            Company::Adobe => "adobe_alltime.csv",
            Company::Google => "google_alltime.csv",
            Company::Microsoft => "microsoft_alltime.csv",
            Company::Ibm => "ibm_alltime.csv",
            Company::Facebook => "facebook_alltime.csv",
            Company::Apple => "apple_alltime.csv",
            Company::GoldmanSachs => "goldman-sachs_alltime.csv",
            Company::Flipkart => "flipkart_alltime.csv",
            Company::Uber => "uber_alltime.csv",
            Company::JpmorganChase => "jpmorgan_alltime.csv",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Company {
    type Err = CompanyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Company::ALL
            .into_iter()
            .find(|company| company.label() == value.trim())
            .ok_or_else(|| CompanyError::Unknown(value.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompanyError {
    #[error("unknown company: {0}")]
    Unknown(String),
}
