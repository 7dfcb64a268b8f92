//! CriminalFileContent contract.

use chrono::{DateTime, Utc};
use crosscheck_core::impl_comparable;
use serde::{Deserialize, Serialize};

use super::wire::{null_as_empty, Wire};

/// Lookup of criminal file content by mdoc number, appearance or room.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCriminalFileContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdoc_justin_no: Option<String>,
    #[serde(rename = "appearanceID", skip_serializing_if = "Option::is_none")]
    pub appearance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proceeding_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_identifier_cd: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriminalFileContentResponse {
    pub response_cd: Option<String>,
    pub response_message: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub court_files: Vec<CriminalFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriminalFile {
    pub mdoc_justin_no: Option<String>,
    pub file_number_text: Option<String>,
    pub court_class_cd: Option<String>,
    pub file_access_level_cd: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub accused: Vec<Accused>,
    #[serde(deserialize_with = "null_as_empty")]
    pub appearances: Vec<CriminalAppearance>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accused {
    pub part_id: Option<String>,
    pub full_name: Option<String>,
    pub birth_date: Option<String>,
    pub counsel_full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriminalAppearance {
    pub appearance_id: Option<String>,
    pub appearance_date: Option<String>,
    pub appearance_time: Option<String>,
    pub appearance_reason_cd: Option<String>,
    pub judge_name: Option<String>,
    pub est_duration_hours: Option<Wire<i32>>,
    pub est_duration_mins: Option<Wire<i32>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub counts: Vec<Count>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Count {
    pub count_id: Option<String>,
    pub statute_section_dsc: Option<String>,
    pub plea_cd: Option<String>,
    pub finding_cd: Option<String>,
}

impl_comparable!(CriminalFileContentResponse {
    scalar response_cd as "responseCd",
    scalar response_message as "responseMessage",
    records court_files as "courtFiles",
});

impl_comparable!(CriminalFile {
    scalar mdoc_justin_no as "mdocJustinNo",
    scalar file_number_text as "fileNumberText",
    scalar court_class_cd as "courtClassCd",
    scalar file_access_level_cd as "fileAccessLevelCd",
    records accused,
    records appearances,
});

impl_comparable!(Accused {
    scalar part_id as "partId",
    scalar full_name as "fullName",
    scalar birth_date as "birthDate",
    scalar counsel_full_name as "counselFullName",
});

impl_comparable!(CriminalAppearance {
    scalar appearance_id as "appearanceId",
    scalar appearance_date as "appearanceDate",
    scalar appearance_time as "appearanceTime",
    scalar appearance_reason_cd as "appearanceReasonCd",
    scalar judge_name as "judgeName",
    scalar est_duration_hours as "estDurationHours",
    scalar est_duration_mins as "estDurationMins",
    records counts,
});

impl_comparable!(Count {
    scalar count_id as "countId",
    scalar statute_section_dsc as "statuteSectionDsc",
    scalar plea_cd as "pleaCd",
    scalar finding_cd as "findingCd",
});
