//! Canadian province and territory codes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PartyError;

/// A Canadian province or territory
///
/// The intake form accepts exactly the thirteen two-letter codes; anything
/// else is rejected and re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    NewfoundlandAndLabrador,
    NovaScotia,
    NorthwestTerritories,
    Nunavut,
    Ontario,
    PrinceEdwardIsland,
    Quebec,
    Saskatchewan,
    Yukon,
}

impl Province {
    /// All provinces and territories, in code order
    pub const ALL: [Province; 13] = [
        Province::Alberta,
        Province::BritishColumbia,
        Province::Manitoba,
        Province::NewBrunswick,
        Province::NewfoundlandAndLabrador,
        Province::NovaScotia,
        Province::NorthwestTerritories,
        Province::Nunavut,
        Province::Ontario,
        Province::PrinceEdwardIsland,
        Province::Quebec,
        Province::Saskatchewan,
        Province::Yukon,
    ];

    /// Returns the two-letter postal abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            Province::Alberta => "AB",
            Province::BritishColumbia => "BC",
            Province::Manitoba => "MB",
            Province::NewBrunswick => "NB",
            Province::NewfoundlandAndLabrador => "NL",
            Province::NovaScotia => "NS",
            Province::NorthwestTerritories => "NT",
            Province::Nunavut => "NU",
            Province::Ontario => "ON",
            Province::PrinceEdwardIsland => "PE",
            Province::Quebec => "QC",
            Province::Saskatchewan => "SK",
            Province::Yukon => "YT",
        }
    }

    /// Parses a two-letter code, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidProvince` for anything outside the
    /// thirteen-code set.
    pub fn from_code(code: &str) -> Result<Self, PartyError> {
        let normalized = code.trim().to_ascii_uppercase();
        Province::ALL
            .into_iter()
            .find(|p| p.code() == normalized)
            .ok_or_else(|| PartyError::InvalidProvince(code.to_string()))
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
