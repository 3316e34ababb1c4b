//! Client-product mapping response DTOs

use serde::Serialize;

use crate::models::NamedOption;

/// Id/name lists for form pickers
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub clients: Vec<NamedOption>,
    pub products: Vec<NamedOption>,
    pub brokers: Vec<NamedOption>,
    pub sales_leads: Vec<NamedOption>,
}
