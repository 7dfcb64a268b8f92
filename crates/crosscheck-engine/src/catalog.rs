//! The fixed, ordered set of comparison categories.

use std::fmt;

use crate::contracts::operation;

/// One named group of scenarios exercising a single operation with a
/// single input dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CriminalFileContentMdoc,
    CriminalFileContentAppearance,
    CriminalFileContentRoom,
    CivilFileContentFileId,
    CivilFileContentAppearance,
    CivilFileContentRoom,
    CourtListRoom,
    CourtListFileR,
    CourtListDivisionFile,
    CodeValues,
    DocumentCriminal,
    DocumentCivil,
    RopReport,
}

impl Category {
    /// Every category, in execution order
    pub const ALL: [Category; 13] = [
        Category::CriminalFileContentMdoc,
        Category::CriminalFileContentAppearance,
        Category::CriminalFileContentRoom,
        Category::CivilFileContentFileId,
        Category::CivilFileContentAppearance,
        Category::CivilFileContentRoom,
        Category::CourtListRoom,
        Category::CourtListFileR,
        Category::CourtListDivisionFile,
        Category::CodeValues,
        Category::DocumentCriminal,
        Category::DocumentCivil,
        Category::RopReport,
    ];

    /// Human-readable name used in console and report banners
    pub fn name(&self) -> &'static str {
        match self {
            Category::CriminalFileContentMdoc => "CriminalFileContent by mdoc",
            Category::CriminalFileContentAppearance => "CriminalFileContent by appearance id",
            Category::CriminalFileContentRoom => "CriminalFileContent by room code",
            Category::CivilFileContentFileId => "CivilFileContent by file id",
            Category::CivilFileContentAppearance => "CivilFileContent by appearance id",
            Category::CivilFileContentRoom => "CivilFileContent by room code",
            Category::CourtListRoom => "CourtList by room code",
            Category::CourtListFileR => "CourtList by file number (division R)",
            Category::CourtListDivisionFile => "CourtList by division and file number",
            Category::CodeValues => "CodeValues",
            Category::DocumentCriminal => "Document (criminal)",
            Category::DocumentCivil => "Document (civil)",
            Category::RopReport => "ROP report",
        }
    }

    /// Backend operation invoked for every scenario
    pub fn operation(&self) -> &'static str {
        match self {
            Category::CriminalFileContentMdoc
            | Category::CriminalFileContentAppearance
            | Category::CriminalFileContentRoom => operation::CRIMINAL_FILE_CONTENT,
            Category::CivilFileContentFileId
            | Category::CivilFileContentAppearance
            | Category::CivilFileContentRoom => operation::CIVIL_FILE_CONTENT,
            Category::CourtListRoom
            | Category::CourtListFileR
            | Category::CourtListDivisionFile => operation::COURT_LIST,
            Category::CodeValues => operation::CODE_VALUES,
            Category::DocumentCriminal | Category::DocumentCivil => operation::GET_DOCUMENT,
            Category::RopReport => operation::GET_ROP_REPORT,
        }
    }

    /// File stem shared by the scenario file (`.csv`) and the report (`.txt`)
    pub fn stem(&self) -> &'static str {
        match self {
            Category::CriminalFileContentMdoc => "getCriminalFileContentMdoc",
            Category::CriminalFileContentAppearance => "getCriminalFileContentApprId",
            Category::CriminalFileContentRoom => "getCriminalFileContentRoomCode",
            Category::CivilFileContentFileId => "getCivilFileContentFileId",
            Category::CivilFileContentAppearance => "getCivilFileContentApprId",
            Category::CivilFileContentRoom => "getCivilFileContentRoomCode",
            Category::CourtListRoom => "getCourtListRoom",
            Category::CourtListFileR => "getCourtListFileR",
            Category::CourtListDivisionFile => "getCourtListFileNoR",
            Category::CodeValues => "getCodeValues",
            Category::DocumentCriminal => "getDocumentCriminal",
            Category::DocumentCivil => "getDocumentCivil",
            Category::RopReport => "getRopReport",
        }
    }

    /// Positional row fields, empty for the fixed-scenario category
    pub fn row_fields(&self) -> &'static [&'static str] {
        match self {
            Category::CriminalFileContentMdoc => &["mdocJustinNo"],
            Category::CriminalFileContentAppearance => &["appearanceId"],
            Category::CriminalFileContentRoom | Category::CourtListRoom => {
                &["roomCd", "proceedingDate", "agencyIdentifierCd"]
            }
            Category::CivilFileContentFileId => &["physicalFileId"],
            Category::CivilFileContentAppearance => &["appearanceId"],
            Category::CivilFileContentRoom => {
                &["courtRoomCd", "courtProceedingDate", "courtLocaCd"]
            }
            Category::CourtListFileR => &["fileNumber"],
            Category::CourtListDivisionFile => &["divisionCd", "fileNumber"],
            Category::CodeValues => &[],
            Category::DocumentCriminal | Category::DocumentCivil => &["documentId"],
            Category::RopReport => &["param1", "param2", "formCd"],
        }
    }

    /// Whether scenarios come from a file rather than a fixed literal
    pub fn reads_scenario_file(&self) -> bool {
        !self.row_fields().is_empty()
    }

    pub fn scenario_file(&self) -> String {
        format!("{}.csv", self.stem())
    }

    pub fn report_file(&self) -> String {
        format!("{}.txt", self.stem())
    }

    /// Look a category up by display name or file stem, ignoring case
    pub fn find(key: &str) -> Option<Category> {
        let key = key.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(key) || c.stem().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
