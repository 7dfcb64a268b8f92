//! Scenario rows and their mapping onto typed requests.
//!
//! Every row builds one fresh request from the category's base value; a
//! blank field keeps the base value and never leaks into the next row.

use std::path::Path;

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, Utc};
use crosscheck_core::errors::{scenario_error, Result, XcError, XcErrorKind};
use crosscheck_core::types::RunContext;
use crosscheck_core::{CategoryPlan, CategoryRun, ReportSink, Scenario, ScenarioRunner};

use crate::catalog::Category;
use crate::contracts::{
    CivilFileContentResponse, CodeValuesResponse, CourtListResponse, CriminalFileContentResponse,
    DocumentRequest, DocumentResponse, GetCivilFileContent, GetCodeValues, GetCourtList,
    GetCriminalFileContent, GetDocument, GetRopReport, RopReportResponse, RopRequest,
};

/// Agency used by the file-number court list categories
pub const DEFAULT_AGENCY: &str = "4681";
/// Room used by the file-number court list categories
pub const DEFAULT_ROOM: &str = "001";
pub const CRIMINAL_DIVISION: &str = "R";
pub const CIVIL_DIVISION: &str = "I";
/// How far back the CodeValues scenario asks for changes
pub const CODE_VALUES_LOOKBACK_YEARS: u32 = 20;

/// One non-empty line of a scenario file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source file
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    /// Field at `index`, or `None` when missing or blank
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Field at `index` for descriptions; blank when missing
    fn show(&self, index: usize) -> &str {
        self.get(index).unwrap_or("")
    }
}

/// Split scenario file contents into trimmed rows, skipping empty lines
pub fn parse_rows(contents: &str) -> Vec<Row> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Row {
            line: index + 1,
            fields: line.split(',').map(|f| f.trim().to_string()).collect(),
        })
        .collect()
}

/// Parse a scenario date: RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`, UTC
pub fn parse_date(source: &str, line: usize, value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(parsed.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| scenario_error(source, line, format!("unparseable date '{}'", value)))
}

fn parse_integer(source: &str, line: usize, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| scenario_error(source, line, format!("unparseable integer '{}'", value)))
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Scenarios of one category, typed by the operation they exercise.
#[derive(Debug, Clone)]
pub enum ScenarioSet {
    CriminalFileContent(CategoryPlan<GetCriminalFileContent>),
    CivilFileContent(CategoryPlan<GetCivilFileContent>),
    CourtList(CategoryPlan<GetCourtList>),
    CodeValues(CategoryPlan<GetCodeValues>),
    Document(CategoryPlan<GetDocument>),
    RopReport(CategoryPlan<GetRopReport>),
}

impl ScenarioSet {
    pub fn name(&self) -> &str {
        match self {
            ScenarioSet::CriminalFileContent(plan) => &plan.name,
            ScenarioSet::CivilFileContent(plan) => &plan.name,
            ScenarioSet::CourtList(plan) => &plan.name,
            ScenarioSet::CodeValues(plan) => &plan.name,
            ScenarioSet::Document(plan) => &plan.name,
            ScenarioSet::RopReport(plan) => &plan.name,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ScenarioSet::CriminalFileContent(plan) => plan.scenarios.len(),
            ScenarioSet::CivilFileContent(plan) => plan.scenarios.len(),
            ScenarioSet::CourtList(plan) => plan.scenarios.len(),
            ScenarioSet::CodeValues(plan) => plan.scenarios.len(),
            ScenarioSet::Document(plan) => plan.scenarios.len(),
            ScenarioSet::RopReport(plan) => plan.scenarios.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scenario descriptions in execution order
    pub fn descriptions(&self) -> Vec<&str> {
        fn of<Q>(plan: &CategoryPlan<Q>) -> Vec<&str> {
            plan.scenarios.iter().map(|s| s.description.as_str()).collect()
        }
        match self {
            ScenarioSet::CriminalFileContent(plan) => of(plan),
            ScenarioSet::CivilFileContent(plan) => of(plan),
            ScenarioSet::CourtList(plan) => of(plan),
            ScenarioSet::CodeValues(plan) => of(plan),
            ScenarioSet::Document(plan) => of(plan),
            ScenarioSet::RopReport(plan) => of(plan),
        }
    }

    /// Run the category with the response contract of its operation
    pub fn run(
        &self,
        runner: &ScenarioRunner,
        sink: ReportSink,
        ctx: &RunContext,
    ) -> Result<CategoryRun> {
        match self {
            ScenarioSet::CriminalFileContent(plan) => {
                runner.run_category::<_, CriminalFileContentResponse>(plan, sink, ctx)
            }
            ScenarioSet::CivilFileContent(plan) => {
                runner.run_category::<_, CivilFileContentResponse>(plan, sink, ctx)
            }
            ScenarioSet::CourtList(plan) => {
                runner.run_category::<_, CourtListResponse>(plan, sink, ctx)
            }
            ScenarioSet::CodeValues(plan) => {
                runner.run_category::<_, CodeValuesResponse>(plan, sink, ctx)
            }
            ScenarioSet::Document(plan) => {
                runner.run_category::<_, DocumentResponse>(plan, sink, ctx)
            }
            ScenarioSet::RopReport(plan) => {
                runner.run_category::<_, RopReportResponse>(plan, sink, ctx)
            }
        }
    }
}

/// Load a category's scenarios from `dir`.
///
/// The fixed CodeValues scenario needs no file. For every other category a
/// missing file or a malformed row is an error.
pub fn load(category: Category, dir: &Path, run_start: DateTime<Utc>) -> Result<ScenarioSet> {
    if !category.reads_scenario_file() {
        return build(category, "", "", run_start);
    }

    let file_name = category.scenario_file();
    let path = dir.join(&file_name);
    let contents = std::fs::read_to_string(&path).map_err(|e| {
        XcError::new(XcErrorKind::Io)
            .with_op("load_scenarios")
            .with_category(category.name())
            .with_message(format!("{}: {}", path.display(), e))
    })?;
    build(category, &file_name, &contents, run_start)
}

/// Build a category's scenarios from file contents already in memory
pub fn build(
    category: Category,
    source: &str,
    contents: &str,
    run_start: DateTime<Utc>,
) -> Result<ScenarioSet> {
    let rows = parse_rows(contents);
    let set = match category {
        Category::CriminalFileContentMdoc
        | Category::CriminalFileContentAppearance
        | Category::CriminalFileContentRoom => {
            ScenarioSet::CriminalFileContent(plan(category, criminal(category, source, &rows)?))
        }
        Category::CivilFileContentFileId
        | Category::CivilFileContentAppearance
        | Category::CivilFileContentRoom => {
            ScenarioSet::CivilFileContent(plan(category, civil(category, source, &rows)?))
        }
        Category::CourtListRoom | Category::CourtListFileR | Category::CourtListDivisionFile => {
            ScenarioSet::CourtList(plan(category, court_list(category, source, &rows, run_start)?))
        }
        Category::CodeValues => ScenarioSet::CodeValues(plan(category, code_values(run_start))),
        Category::DocumentCriminal | Category::DocumentCivil => {
            ScenarioSet::Document(plan(category, documents(category, &rows)))
        }
        Category::RopReport => ScenarioSet::RopReport(plan(category, rop_reports(&rows))),
    };
    Ok(set)
}

fn plan<Q>(category: Category, scenarios: Vec<Scenario<Q>>) -> CategoryPlan<Q> {
    CategoryPlan::new(category.name(), category.operation(), scenarios)
}

fn criminal(
    category: Category,
    source: &str,
    rows: &[Row],
) -> Result<Vec<Scenario<GetCriminalFileContent>>> {
    rows.iter()
        .map(|row| -> Result<Scenario<GetCriminalFileContent>> {
            let base = GetCriminalFileContent::default();
            let scenario = match category {
                Category::CriminalFileContentMdoc => Scenario::new(
                    format!("CriminalFileContent with mdoc justin no: {}", row.show(0)),
                    GetCriminalFileContent {
                        mdoc_justin_no: owned(row.get(0)),
                        ..base
                    },
                ),
                Category::CriminalFileContentAppearance => Scenario::new(
                    format!("CriminalFileContent with appearance id: {}", row.show(0)),
                    GetCriminalFileContent {
                        appearance_id: owned(row.get(0)),
                        ..base
                    },
                ),
                _ => Scenario::new(
                    format!(
                        "CriminalFileContent with room code: {}, proceeding date: {}, agency code: {}",
                        row.show(0),
                        row.show(1),
                        row.show(2)
                    ),
                    GetCriminalFileContent {
                        room_cd: owned(row.get(0)).or(base.room_cd),
                        proceeding_date: row
                            .get(1)
                            .map(|v| parse_date(source, row.line, v))
                            .transpose()?
                            .or(base.proceeding_date),
                        agency_identifier_cd: owned(row.get(2)).or(base.agency_identifier_cd),
                        ..GetCriminalFileContent::default()
                    },
                ),
            };
            Ok(scenario)
        })
        .collect()
}

fn civil(
    category: Category,
    source: &str,
    rows: &[Row],
) -> Result<Vec<Scenario<GetCivilFileContent>>> {
    rows.iter()
        .map(|row| -> Result<Scenario<GetCivilFileContent>> {
            let base = GetCivilFileContent::default();
            let scenario = match category {
                Category::CivilFileContentFileId => Scenario::new(
                    format!("CivilFileContent with physical file id: {}", row.show(0)),
                    GetCivilFileContent {
                        physical_file_id: owned(row.get(0)),
                        ..base
                    },
                ),
                Category::CivilFileContentAppearance => Scenario::new(
                    format!("CivilFileContent with appearance id: {}", row.show(0)),
                    GetCivilFileContent {
                        appearance_id: row
                            .get(0)
                            .map(|v| parse_integer(source, row.line, v))
                            .transpose()?,
                        ..base
                    },
                ),
                _ => Scenario::new(
                    format!(
                        "CivilFileContent with room code: {}, proceeding date: {}, location code: {}",
                        row.show(0),
                        row.show(1),
                        row.show(2)
                    ),
                    GetCivilFileContent {
                        court_room_cd: owned(row.get(0)).or(base.court_room_cd),
                        court_proceeding_date: row
                            .get(1)
                            .map(|v| parse_date(source, row.line, v))
                            .transpose()?
                            .or(base.court_proceeding_date),
                        court_loca_cd: owned(row.get(2)).or(base.court_loca_cd),
                        ..GetCivilFileContent::default()
                    },
                ),
            };
            Ok(scenario)
        })
        .collect()
}

fn court_list(
    category: Category,
    source: &str,
    rows: &[Row],
    run_start: DateTime<Utc>,
) -> Result<Vec<Scenario<GetCourtList>>> {
    let by_file_number = GetCourtList {
        agency_identifier_cd: Some(DEFAULT_AGENCY.to_string()),
        room_cd: Some(DEFAULT_ROOM.to_string()),
        proceeding_date: Some(run_start),
        ..GetCourtList::default()
    };

    rows.iter()
        .map(|row| -> Result<Scenario<GetCourtList>> {
            let scenario = match category {
                Category::CourtListRoom => {
                    let base = GetCourtList::default();
                    Scenario::new(
                        format!(
                            "CourtList with room code: {}, proceeding date: {}, agency code: {}",
                            row.show(0),
                            row.show(1),
                            row.show(2)
                        ),
                        GetCourtList {
                            room_cd: owned(row.get(0)).or(base.room_cd),
                            proceeding_date: row
                                .get(1)
                                .map(|v| parse_date(source, row.line, v))
                                .transpose()?
                                .or(base.proceeding_date),
                            agency_identifier_cd: owned(row.get(2)).or(base.agency_identifier_cd),
                            ..GetCourtList::default()
                        },
                    )
                }
                Category::CourtListFileR => Scenario::new(
                    format!(
                        "CourtList with division: {} and file number: {}",
                        CRIMINAL_DIVISION,
                        row.show(0)
                    ),
                    GetCourtList {
                        division_cd: Some(CRIMINAL_DIVISION.to_string()),
                        file_number: owned(row.get(0)),
                        ..by_file_number.clone()
                    },
                ),
                _ => Scenario::new(
                    format!(
                        "CourtList with division: {} and file number: {}",
                        row.show(0),
                        row.show(1)
                    ),
                    GetCourtList {
                        division_cd: owned(row.get(0)).or(by_file_number.division_cd.clone()),
                        file_number: owned(row.get(1)).or(by_file_number.file_number.clone()),
                        ..by_file_number.clone()
                    },
                ),
            };
            Ok(scenario)
        })
        .collect()
}

fn code_values(run_start: DateTime<Utc>) -> Vec<Scenario<GetCodeValues>> {
    let since = run_start
        .checked_sub_months(Months::new(CODE_VALUES_LOOKBACK_YEARS * 12))
        .unwrap_or(run_start);
    vec![Scenario::new(
        format!("CodeValues with last retrieved date: {}", since.to_rfc3339()),
        GetCodeValues {
            last_retrieved_date: Some(since),
        },
    )]
}

fn documents(category: Category, rows: &[Row]) -> Vec<Scenario<GetDocument>> {
    let division = if category == Category::DocumentCivil {
        CIVIL_DIVISION
    } else {
        CRIMINAL_DIVISION
    };
    rows.iter()
        .map(|row| {
            Scenario::new(
                format!(
                    "GetDocument with division code: {} and document id: {}",
                    division,
                    row.show(0)
                ),
                GetDocument {
                    document_request: DocumentRequest {
                        court_division_cd: Some(division.to_string()),
                        document_id: owned(row.get(0)),
                    },
                },
            )
        })
        .collect()
}

fn rop_reports(rows: &[Row]) -> Vec<Scenario<GetRopReport>> {
    rows.iter()
        .map(|row| {
            Scenario::new(
                format!(
                    "GetROPReport with param1: {}, param2: {}, form code: {}",
                    row.show(0),
                    row.show(1),
                    row.show(2)
                ),
                GetRopReport {
                    rop_request: RopRequest {
                        param1: owned(row.get(0)),
                        param2: owned(row.get(1)),
                        form_cd: owned(row.get(2)),
                    },
                },
            )
        })
        .collect()
}
