//! Region catalog
//!
//! Static table of the supported regions and the templates used to synthesize
//! their addresses and phone numbers. The table is fixed at compile time.
//!
//! # Regions
//!
//! | Region     | Phone template        | Address style          |
//! |------------|-----------------------|------------------------|
//! | Poland     | `+48 ### ### ###`     | street, then number    |
//! | USA        | `+1 (###) ###-####`   | number, then street    |
//! | Georgia    | `+995 ### ### ###`    | street, then number    |
//! | Bangladesh | `+880 ### ### ####`   | number, then street    |
//!
//! Names selected from user-facing strings go through [`RegionSelector`], which
//! keeps unrecognized names around so the synthesizer can fall back to
//! [`RegionCatalog::fallback`] instead of failing the page.
//!
//! # Example
//!
//! ```
//! use fakeuser::region::{Region, RegionCatalog, RegionSelector};
//!
//! let template = RegionCatalog::template_for(&RegionSelector::Known(Region::Usa)).unwrap();
//! assert_eq!(template.phone_format, "+1 (###) ###-####");
//!
//! let unknown = RegionSelector::from("Atlantis");
//! assert!(RegionCatalog::template_for(&unknown).is_err());
//! ```

pub mod corpus;

use crate::error::GenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of supported regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Poland,
    #[serde(rename = "USA")]
    Usa,
    Georgia,
    Bangladesh,
}

impl Region {
    /// All regions, in selector order
    pub const ALL: [Region; 4] = [Region::Poland, Region::Usa, Region::Georgia, Region::Bangladesh];

    /// Display name used by selectors and exports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Poland => "Poland",
            Self::Usa => "USA",
            Self::Georgia => "Georgia",
            Self::Bangladesh => "Bangladesh",
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::Usa
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GenError::UnknownRegion(wanted.to_string()))
    }
}

/// Region as chosen by a user-facing selector
///
/// Unrecognized names are preserved rather than rejected; lookups for them
/// fail with [`GenError::UnknownRegion`] and the synthesizer falls back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionSelector {
    Known(Region),
    Unrecognized(String),
}

impl RegionSelector {
    pub fn region(&self) -> Option<Region> {
        match self {
            Self::Known(region) => Some(*region),
            Self::Unrecognized(_) => None,
        }
    }
}

impl Default for RegionSelector {
    fn default() -> Self {
        Self::Known(Region::default())
    }
}

impl From<Region> for RegionSelector {
    fn from(region: Region) -> Self {
        Self::Known(region)
    }
}

impl From<&str> for RegionSelector {
    fn from(name: &str) -> Self {
        match name.parse::<Region>() {
            Ok(region) => Self::Known(region),
            Err(_) => Self::Unrecognized(name.trim().to_string()),
        }
    }
}

impl From<String> for RegionSelector {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<RegionSelector> for String {
    fn from(selector: RegionSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for RegionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(region) => region.fmt(f),
            Self::Unrecognized(name) => f.write_str(name),
        }
    }
}

/// Order of the street and building number within an address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressStyle {
    /// `ul. Długa 12`
    StreetThenNumber,
    /// `742 Maple Avenue`
    NumberThenStreet,
}

impl AddressStyle {
    pub fn format(&self, street: &str, number: u32) -> String {
        match self {
            Self::StreetThenNumber => format!("{} {}", street, number),
            Self::NumberThenStreet => format!("{} {}", number, street),
        }
    }
}

/// Synthesis rules for one region
#[derive(Debug, PartialEq, Eq)]
pub struct RegionTemplate {
    /// Phone template, each `#` is replaced by one digit
    pub phone_format: &'static str,
    pub address_style: AddressStyle,
    pub cities: &'static [&'static str],
    pub streets: &'static [&'static str],
}

static POLAND: RegionTemplate = RegionTemplate {
    phone_format: "+48 ### ### ###",
    address_style: AddressStyle::StreetThenNumber,
    cities: corpus::POLAND_CITIES,
    streets: corpus::POLAND_STREETS,
};

static USA: RegionTemplate = RegionTemplate {
    phone_format: "+1 (###) ###-####",
    address_style: AddressStyle::NumberThenStreet,
    cities: corpus::USA_CITIES,
    streets: corpus::USA_STREETS,
};

static GEORGIA: RegionTemplate = RegionTemplate {
    phone_format: "+995 ### ### ###",
    address_style: AddressStyle::StreetThenNumber,
    cities: corpus::GEORGIA_CITIES,
    streets: corpus::GEORGIA_STREETS,
};

static BANGLADESH: RegionTemplate = RegionTemplate {
    phone_format: "+880 ### ### ####",
    address_style: AddressStyle::NumberThenStreet,
    cities: corpus::BANGLADESH_CITIES,
    streets: corpus::BANGLADESH_STREETS,
};

static FALLBACK: RegionTemplate = RegionTemplate {
    phone_format: "##########",
    address_style: AddressStyle::NumberThenStreet,
    cities: corpus::FALLBACK_CITIES,
    streets: corpus::FALLBACK_STREETS,
};

/// Lookup over the static region table
pub struct RegionCatalog;

impl RegionCatalog {
    /// Template for a known region
    pub fn template(region: Region) -> &'static RegionTemplate {
        match region {
            Region::Poland => &POLAND,
            Region::Usa => &USA,
            Region::Georgia => &GEORGIA,
            Region::Bangladesh => &BANGLADESH,
        }
    }

    /// Template for a selector; unrecognized names fail with `UnknownRegion`
    pub fn template_for(selector: &RegionSelector) -> Result<&'static RegionTemplate, GenError> {
        match selector {
            RegionSelector::Known(region) => Ok(Self::template(*region)),
            RegionSelector::Unrecognized(name) => Err(GenError::UnknownRegion(name.clone())),
        }
    }

    /// Default rules: unformatted ten-digit phone and generic address pools
    pub fn fallback() -> &'static RegionTemplate {
        &FALLBACK
    }

    /// Template for a selector, falling back to the default rules
    pub fn template_or_fallback(selector: &RegionSelector) -> &'static RegionTemplate {
        match Self::template_for(selector) {
            Ok(template) => template,
            Err(err) => {
                tracing::warn!(%err, "using default synthesis rules");
                Self::fallback()
            }
        }
    }
}
