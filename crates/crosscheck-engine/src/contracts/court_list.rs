//! CourtList contract.

use chrono::{DateTime, Utc};
use crosscheck_core::impl_comparable;
use serde::{Deserialize, Serialize};

use super::wire::{null_as_empty, Wire};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCourtList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_identifier_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proceeding_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourtListResponse {
    pub response_cd: Option<String>,
    pub response_message: Option<String>,
    pub court_list: Option<CourtList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourtList {
    pub court_agency_identifier: Option<String>,
    pub court_room: Option<String>,
    pub court_proceeding_date: Option<Wire<DateTime<Utc>>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub criminal_files: Vec<CourtListFile>,
    #[serde(deserialize_with = "null_as_empty")]
    pub civil_files: Vec<CourtListFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourtListFile {
    pub file_number: Option<String>,
    pub file_seq_number: Option<String>,
    pub appearance_id: Option<String>,
    pub appearance_time: Option<String>,
    pub court_list_type_cd: Option<String>,
    pub style_of_cause: Option<String>,
    pub counsel_full_name: Option<String>,
    pub attendance_method_cd: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub hearing_restrictions: Vec<HearingRestriction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HearingRestriction {
    pub hearing_restriction_cd: Option<String>,
    pub adjudicator_name: Option<String>,
    pub hearing_restriction_date: Option<String>,
}

impl_comparable!(CourtListResponse {
    scalar response_cd as "responseCd",
    scalar response_message as "responseMessage",
    object court_list as "courtList",
});

impl_comparable!(CourtList {
    scalar court_agency_identifier as "courtAgencyIdentifier",
    scalar court_room as "courtRoom",
    scalar court_proceeding_date as "courtProceedingDate",
    records criminal_files as "criminalFiles",
    records civil_files as "civilFiles",
});

impl_comparable!(CourtListFile {
    scalar file_number as "fileNumber",
    scalar file_seq_number as "fileSeqNumber",
    scalar appearance_id as "appearanceId",
    scalar appearance_time as "appearanceTime",
    scalar court_list_type_cd as "courtListTypeCd",
    scalar style_of_cause as "styleOfCause",
    scalar counsel_full_name as "counselFullName",
    scalar attendance_method_cd as "attendanceMethodCd",
    records hearing_restrictions as "hearingRestrictions",
});

impl_comparable!(HearingRestriction {
    scalar hearing_restriction_cd as "hearingRestrictionCd",
    scalar adjudicator_name as "adjudicatorName",
    scalar hearing_restriction_date as "hearingRestrictionDate",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crosscheck_core::diff::{ChangeRecord, StructuralDiffer};
    use serde_json::json;

    #[test]
    fn test_missing_court_list_is_reported_at_object_path() {
        let left: CourtListResponse =
            serde_json::from_value(json!({"responseCd": "0", "courtList": {}})).unwrap();
        let right: CourtListResponse = serde_json::from_value(json!({"responseCd": "0"})).unwrap();

        let records = StructuralDiffer::new("CourtListResponse")
            .compare_responses(Some(&left), Some(&right));
        assert_eq!(
            records,
            vec![ChangeRecord::value_changed(
                "CourtListResponse.courtList",
                Some("CourtList".into()),
                None
            )]
        );
    }
}
