//! Policy holder value object

use serde::{Deserialize, Serialize};

use crate::error::PartyError;
use crate::province::Province;
use crate::validation::{
    format_postal_code, title_case, validate_name_field, validate_phone_number,
    validate_postal_code,
};

/// The person taking out the policy
///
/// Immutable once constructed: the constructor normalizes (title case for
/// free text, `X#X #X#` for the postal code) and validates every field, so
/// a `PolicyHolder` value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyHolder {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub province: Province,
    pub postal_code: String,
    pub phone_number: String,
}

impl PolicyHolder {
    /// Builds a holder from raw intake answers
    ///
    /// # Errors
    ///
    /// Returns a `PartyError` naming the first field that fails validation.
    pub fn new(
        first_name: &str,
        last_name: &str,
        address: &str,
        city: &str,
        province: Province,
        postal_code: &str,
        phone_number: &str,
    ) -> Result<Self, PartyError> {
        let first_name = title_case(first_name);
        let last_name = title_case(last_name);
        let address = title_case(address);
        let city = title_case(city);
        let postal_code = format_postal_code(postal_code);

        Self::check_name_field("first name", &first_name)?;
        Self::check_name_field("last name", &last_name)?;
        Self::check_name_field("address", &address)?;
        Self::check_name_field("city", &city)?;

        if !validate_postal_code(&postal_code) {
            return Err(PartyError::InvalidPostalCode(postal_code));
        }
        if !validate_phone_number(phone_number) {
            return Err(PartyError::InvalidPhoneNumber(phone_number.to_string()));
        }

        Ok(Self {
            first_name,
            last_name,
            address,
            city,
            province,
            postal_code,
            phone_number: phone_number.to_string(),
        })
    }

    /// Full display name, `First Last`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn check_name_field(field: &'static str, value: &str) -> Result<(), PartyError> {
        if validate_name_field(value) {
            Ok(())
        } else {
            Err(PartyError::InvalidField {
                field,
                value: value.to_string(),
            })
        }
    }
}
