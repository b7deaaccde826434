//! Salary plan classification

use crate::model::PositionType;

/// Map an HR salary plan code to a position category.
///
/// Student workers, fellowships, scholarships, OPS and hourly plans have no
/// category and yield `None`, as does any unknown code.
pub fn position_type_for_salary_plan(salary_plan: &str) -> Option<PositionType> {
    use PositionType::*;

    match salary_plan {
        "CPFI" | "FAPD" => Some(Postdoc),
        "CTSY" => Some(CourtesyFaculty),
        "FA09" | "FA10" | "FA12" | "FASU" => Some(Faculty),
        "FA9M" | "FACM" => Some(ClinicalFaculty),
        "HOUS" => Some(Housestaff),
        "OF09" | "OF12" | "OFSU" => Some(TemporaryFaculty),
        "TA09" | "TA10" | "TA12" | "TASU" | "TU1E" | "TU2E" | "TU9E" | "TUSE" | "US2E" => {
            Some(NonAcademic)
        }
        // FELL ISCR: lump sum only; FWSP STAS STBW: student assistants;
        // GA09 GA12 GASU: graduate assistants; OPS; TEAMS hourly; USPS
        _ => None,
    }
}
