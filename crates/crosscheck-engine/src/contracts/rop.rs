//! GetROPReport contract.

use crosscheck_core::impl_comparable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetRopReport {
    #[serde(rename = "ROPRequest")]
    pub rop_request: RopRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RopRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_cd: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RopReportResponse {
    pub response_cd: Option<String>,
    pub response_message: Option<String>,
    pub report: Option<String>,
}

impl_comparable!(RopReportResponse {
    scalar response_cd as "responseCd",
    scalar response_message as "responseMessage",
    scalar report,
});
