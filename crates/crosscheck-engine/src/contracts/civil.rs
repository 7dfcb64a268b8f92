//! CivilFileContent contract.

use chrono::{DateTime, Utc};
use crosscheck_core::impl_comparable;
use serde::{Deserialize, Serialize};

use super::wire::{null_as_empty, Wire};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCivilFileContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_room_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_proceeding_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_loca_cd: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CivilFileContentResponse {
    pub response_cd: Option<String>,
    pub response_message: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub civil_files: Vec<CivilFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CivilFile {
    pub physical_file_id: Option<String>,
    pub file_number: Option<String>,
    pub court_class_cd: Option<String>,
    pub style_of_cause: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub parties: Vec<CivilParty>,
    #[serde(deserialize_with = "null_as_empty")]
    pub appearances: Vec<CivilAppearance>,
    #[serde(deserialize_with = "null_as_empty")]
    pub documents: Vec<CivilDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CivilParty {
    pub party_id: Option<String>,
    pub role_type_code: Option<String>,
    pub full_name: Option<String>,
    pub counsel_full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CivilAppearance {
    pub appearance_id: Option<Wire<i64>>,
    pub appearance_date: Option<Wire<DateTime<Utc>>>,
    pub appearance_reason_cd: Option<String>,
    pub adjudicator_name: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub issues: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CivilDocument {
    pub docm_id: Option<String>,
    pub docm_type_dsc: Option<String>,
    pub docm_status: Option<String>,
    pub filed_by: Option<String>,
    pub order_document_yn: Option<String>,
}

impl_comparable!(CivilFileContentResponse {
    scalar response_cd as "responseCd",
    scalar response_message as "responseMessage",
    records civil_files as "civilFiles",
});

impl_comparable!(CivilFile {
    scalar physical_file_id as "physicalFileId",
    scalar file_number as "fileNumber",
    scalar court_class_cd as "courtClassCd",
    scalar style_of_cause as "styleOfCause",
    records parties,
    records appearances,
    records documents,
});

impl_comparable!(CivilParty {
    scalar party_id as "partyId",
    scalar role_type_code as "roleTypeCode",
    scalar full_name as "fullName",
    scalar counsel_full_name as "counselFullName",
});

impl_comparable!(CivilAppearance {
    scalar appearance_id as "appearanceId",
    scalar appearance_date as "appearanceDate",
    scalar appearance_reason_cd as "appearanceReasonCd",
    scalar adjudicator_name as "adjudicatorName",
    scalars issues,
});

impl_comparable!(CivilDocument {
    scalar docm_id as "docmId",
    scalar docm_type_dsc as "docmTypeDsc",
    scalar docm_status as "docmStatus",
    scalar filed_by as "filedBy",
    scalar order_document_yn as "orderDocumentYN",
});
