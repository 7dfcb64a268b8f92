//! GetDocument contract.

use crosscheck_core::impl_comparable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocument {
    pub document_request: DocumentRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_division_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentResponse {
    pub response_cd: Option<String>,
    pub response_message: Option<String>,
    pub mime_type: Option<String>,
    pub document_url: Option<String>,
    pub b64_content: Option<String>,
}

impl_comparable!(DocumentResponse {
    scalar response_cd as "responseCd",
    scalar response_message as "responseMessage",
    scalar mime_type as "mimeType",
    scalar document_url as "documentUrl",
    scalar b64_content as "b64Content",
});
