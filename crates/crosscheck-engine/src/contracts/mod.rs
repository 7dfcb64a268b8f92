//! Request and response contracts of the six backend operations.
//!
//! Requests serialize with the backends' camelCase wire names and omit
//! unset fields. Responses decode leniently (every field optional, missing
//! or `null` lists empty, see [`wire`]) and declare their comparable fields with
//! [`impl_comparable!`](crosscheck_core::impl_comparable), labelled with
//! the same wire names so report paths read like the payload.

pub mod civil;
pub mod codes;
pub mod court_list;
pub mod criminal;
pub mod document;
pub mod rop;
pub mod wire;

pub use civil::{CivilFileContentResponse, GetCivilFileContent};
pub use codes::{CodeValuesResponse, GetCodeValues};
pub use court_list::{CourtListResponse, GetCourtList};
pub use criminal::{CriminalFileContentResponse, GetCriminalFileContent};
pub use document::{DocumentRequest, DocumentResponse, GetDocument};
pub use rop::{GetRopReport, RopReportResponse, RopRequest};

/// Backend operation names, also the last URL path segment
pub mod operation {
    pub const CRIMINAL_FILE_CONTENT: &str = "CriminalFileContent";
    pub const CIVIL_FILE_CONTENT: &str = "CivilFileContent";
    pub const COURT_LIST: &str = "CourtList";
    pub const CODE_VALUES: &str = "CodeValues";
    pub const GET_DOCUMENT: &str = "GetDocument";
    pub const GET_ROP_REPORT: &str = "GetROPReport";
}
