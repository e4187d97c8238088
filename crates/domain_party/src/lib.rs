//! Policy Holder Domain
//!
//! This crate owns the identity side of an intake session: the policy
//! holder value object, the Canadian province/territory code set, and the
//! pure validators applied to every free-text field before it is accepted.
//!
//! Validators here never prompt, loop, or touch I/O; the interface layer
//! owns re-prompting (the validators only decide accept/reject).

pub mod error;
pub mod holder;
pub mod province;
pub mod validation;

pub use error::PartyError;
pub use holder::PolicyHolder;
pub use province::Province;
pub use validation::{
    format_postal_code, title_case, validate_name_field, validate_phone_number,
    validate_postal_code,
};
