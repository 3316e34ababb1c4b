//! Broker request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, utils::validation::validate_not_blank};

/// Create or update broker request
#[derive(Debug, Deserialize, Validate)]
pub struct BrokerRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(email)]
    pub contact_email: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub partner_type: String,
}
