//! Marketplaces and their MWS endpoints

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MwsError;

/// Amazon marketplace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Marketplace {
    // North America
    #[default]
    Us,
    Ca,
    Mx,
    Br,
    // Europe
    Uk,
    De,
    Fr,
    It,
    Es,
    In,
    // Far East
    Jp,
    Cn,
    Au,
}

impl Marketplace {
    pub const ALL: [Marketplace; 13] = [
        Marketplace::Us,
        Marketplace::Ca,
        Marketplace::Mx,
        Marketplace::Br,
        Marketplace::Uk,
        Marketplace::De,
        Marketplace::Fr,
        Marketplace::It,
        Marketplace::Es,
        Marketplace::In,
        Marketplace::Jp,
        Marketplace::Cn,
        Marketplace::Au,
    ];

    /// 마켓플레이스 ID
    pub fn id(&self) -> &'static str {
        match self {
            Marketplace::Us => "ATVPDKIKX0DER",
            Marketplace::Ca => "A2EUQ1WTGCTBG2",
            Marketplace::Mx => "A1AM78C64UM0Y8",
            Marketplace::Br => "A2Q3Y263D00KWC",
            Marketplace::Uk => "A1F83G8C2ARO7P",
            Marketplace::De => "A1PA6795UKMFR9",
            Marketplace::Fr => "A13V1IB3VIYZZH",
            Marketplace::It => "APJ6JRA9NG5V4",
            Marketplace::Es => "A1RKKUPIHCS9HS",
            Marketplace::In => "A21TJRUUN4KGV",
            Marketplace::Jp => "A1VC38T7YXB528",
            Marketplace::Cn => "AAHKV2X7AFYLW",
            Marketplace::Au => "A39IBJ37TRP1C6",
        }
    }

    /// MWS host serving this marketplace
    pub fn mws_endpoint(&self) -> &'static str {
        match self {
            Marketplace::Us | Marketplace::Br => "mws.amazonservices.com",
            Marketplace::Ca => "mws.amazonservices.ca",
            Marketplace::Mx => "mws.amazonservices.com.mx",
            Marketplace::Uk
            | Marketplace::De
            | Marketplace::Fr
            | Marketplace::It
            | Marketplace::Es => "mws-eu.amazonservices.com",
            Marketplace::In => "mws.amazonservices.in",
            Marketplace::Jp => "mws.amazonservices.jp",
            Marketplace::Cn => "mws.amazonservices.com.cn",
            Marketplace::Au => "mws.amazonservices.com.au",
        }
    }

    pub fn country_code(&self) -> &'static str {
        match self {
            Marketplace::Us => "US",
            Marketplace::Ca => "CA",
            Marketplace::Mx => "MX",
            Marketplace::Br => "BR",
            Marketplace::Uk => "UK",
            Marketplace::De => "DE",
            Marketplace::Fr => "FR",
            Marketplace::It => "IT",
            Marketplace::Es => "ES",
            Marketplace::In => "IN",
            Marketplace::Jp => "JP",
            Marketplace::Cn => "CN",
            Marketplace::Au => "AU",
        }
    }

    /// Looks a marketplace up by its marketplace id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.country_code())
    }
}

impl FromStr for Marketplace {
    type Err = MwsError;

    /// Parses a country code; `GB` is accepted for the United Kingdom.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let code = if code == "GB" { "UK".to_string() } else { code };
        Self::ALL
            .into_iter()
            .find(|m| m.country_code() == code)
            .ok_or_else(|| MwsError::configuration(format!("unknown marketplace: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_marketplace() {
        let m = Marketplace::Us;
        assert_eq!(m.id(), "ATVPDKIKX0DER");
        assert_eq!(m.mws_endpoint(), "mws.amazonservices.com");
        assert_eq!(Marketplace::default(), m);
    }

    #[test]
    fn test_europe_shares_endpoint() {
        for m in [Marketplace::Uk, Marketplace::De, Marketplace::Fr, Marketplace::It, Marketplace::Es] {
            assert_eq!(m.mws_endpoint(), "mws-eu.amazonservices.com");
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Marketplace::from_id("A1VC38T7YXB528"), Some(Marketplace::Jp));
        assert_eq!(Marketplace::from_id("nope"), None);
    }

    #[test]
    fn test_ids_are_unique() {
        for m in Marketplace::ALL {
            assert_eq!(Marketplace::from_id(m.id()), Some(m));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("de".parse::<Marketplace>().unwrap(), Marketplace::De);
        assert_eq!("GB".parse::<Marketplace>().unwrap(), Marketplace::Uk);
        let err = "XX".parse::<Marketplace>().unwrap_err();
        assert!(err.is_configuration_error());
    }
}
