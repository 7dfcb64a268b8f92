//! CodeValues contract.

use chrono::{DateTime, Utc};
use crosscheck_core::impl_comparable;
use serde::{Deserialize, Serialize};

use super::wire::null_as_empty;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCodeValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_retrieved_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeValuesResponse {
    pub response_cd: Option<String>,
    pub response_message: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub code_values: Vec<CodeValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeValue {
    pub code_type: Option<String>,
    pub code: Option<String>,
    pub short_desc: Option<String>,
    pub long_desc: Option<String>,
    pub flex: Option<String>,
}

impl_comparable!(CodeValuesResponse {
    scalar response_cd as "responseCd",
    scalar response_message as "responseMessage",
    records code_values as "codeValues",
});

impl_comparable!(CodeValue {
    scalar code_type as "codeType",
    scalar code,
    scalar short_desc as "shortDesc",
    scalar long_desc as "longDesc",
    scalar flex,
});
