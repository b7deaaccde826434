//! Job-title abbreviation expansion
//!
//! HR job code descriptions are squeezed into short fields with a fixed
//! set of abbreviations. [`improve_jobcode_description`] reverses that.

/// Separators swapped for sentinels while the table runs, so a
/// replacement ending in a space also matches before `/`, `,` and `-`.
const SEPARATORS: [(&str, &str); 3] = [("/", " @"), (",", " !"), ("-", " #")];

/// Ordered (abbreviation, expansion) rewrites.
///
/// Applied top to bottom over the whole string. Order is significant:
/// short patterns that are prefixes of longer ones (`Ass`/`Assoc`,
/// `Fin`/`Finan`, `Tech` twice) produce the HR-visible titles only in
/// exactly this sequence.
const EXPANSIONS: &[(&str, &str)] = &[
    ("Aca ", "Academic "),
    ("Act ", "Acting "),
    ("Advanc ", "Advanced "),
    ("Adv ", "Advisory "),
    ("Agric ", "Agricultural "),
    ("Alumn Aff ", "Alumni Affairs "),
    ("Anal", "Analyst"),
    ("Ass", "Assistant"),
    ("Ast #R ", "Research Assistant "),
    ("Ast #G ", "Grading Assistant "),
    ("Ast #T ", "Teaching Assistant "),
    ("Ast ", "Assistant "),
    ("Affl ", "Affiliate "),
    ("Aso ", "Associate "),
    ("Asoc ", "Associate "),
    ("Assoc ", "Associate "),
    ("Bio ", "Biological "),
    ("Prof ", "Professor "),
    ("Mstr ", "Master "),
    ("Couns ", "Counselor "),
    ("Adj ", "Adjunct "),
    ("Dist ", "Distinguished "),
    ("Chem", "Chemist"),
    ("Chr ", "Chair "),
    ("Cio ", "Chief Information Officer "),
    ("Comm", "Communications"),
    ("Coo ", "Chief Operating Officer "),
    ("Coord ", "Coordinator "),
    ("Co ", "Courtesy "),
    ("Clin ", "Clinical "),
    ("Clrk", "Clerk"),
    ("Dn ", "Dean "),
    ("Fin", "Financial"),
    ("Finan ", "Financial "),
    ("Stu ", "Student "),
    ("Prg ", "Program "),
    ("Dev ", "Development "),
    ("Aff ", "Affiliate "),
    ("Svcs ", "Services "),
    ("Devel ", "Development "),
    ("Tech ", "Technician "),
    ("Progs ", "Programs "),
    ("Facil ", "Facility "),
    ("Hlt", "Health"),
    ("Hlth ", "Health "),
    ("Int ", "Interim "),
    ("Sctst ", "Scientist "),
    ("Supp ", "Support "),
    ("Cty ", "County "),
    ("Ext ", "Extension "),
    ("Emer ", "Emeritus "),
    ("Enforce ", "Enforcement "),
    ("Environ ", "Environmental "),
    ("Gen ", "General "),
    ("Grd", "Graduate"),
    ("Jnt ", "Joint "),
    ("Jr", "Junior"),
    ("Eng ", "Engineer "),
    ("Ctr ", "Center "),
    ("Opr ", "Operator "),
    ("Admin ", "Administrative "),
    ("Dis ", "Distinguished "),
    ("Ser ", "Service "),
    ("Rep ", "Representative "),
    ("Radiol ", "Radiology "),
    ("Technol ", "Technologist "),
    ("Pres ", "President "),
    ("Pres5 ", "President 5 "),
    ("Pres6 ", "President 6 "),
    ("Emin ", "Eminent "),
    ("Cfo ", "Chief Financial Officer "),
    ("Prov ", "Provisional "),
    ("Adm ", "Administrator "),
    ("Info ", "Information "),
    ("It ", "Information Technology "),
    ("Mgr ", "Manager "),
    ("Mgt ", "Management "),
    ("Vis ", "Visiting "),
    ("Phas ", "Phased "),
    ("Prog ", "Programmer "),
    ("Pract ", "Practitioner "),
    ("Registr ", "Registration "),
    ("Rsch ", "Research "),
    ("Rsrh ", "Research "),
    ("Ret ", "Retirement "),
    ("Sch ", "School "),
    ("Sci ", "Scientist "),
    ("Svcs ", "Services "),
    ("Serv ", "Service "),
    ("Tch ", "Teaching "),
    ("Tele ", "Telecommunications "),
    ("Tv ", "TV "),
    ("Univ ", "University "),
    ("Educ ", "Education "),
    ("Crd ", "Coordinator "),
    ("Res ", "Research "),
    ("Dir ", "Director "),
    ("Pky ", "PK Yonge "),
    ("Rcv ", "Receiving "),
    ("Sr ", "Senior "),
    ("Spec ", "Specialist "),
    ("Spc ", "Specialist "),
    ("Spv ", "Supervisor "),
    ("Supv ", "Supervisor "),
    ("Supt ", "Superintendant "),
    ("Stud", "Student"),
    ("Pky ", "P. K. Yonge "),
    ("Ii ", "II "),
    ("Iii ", "III "),
    ("Iv ", "IV "),
    ("Communic ", "Communications "),
    ("Postdoc ", "Postdoctoral "),
    ("Tech ", "Technician "),
    ("Vp ", "Vice President "),
];

/// Expand an abbreviated HR job code description into a readable title
pub fn improve_jobcode_description(description: &str) -> String {
    let mut text = title_case(&description.to_lowercase());
    text.push(' ');

    let mut text = text.replace(", ,", ",").replace("  ", " ");
    for (separator, sentinel) in SEPARATORS {
        text = text.replace(separator, sentinel);
    }

    for (abbreviation, expansion) in EXPANSIONS {
        text = text.replace(abbreviation, expansion);
    }

    for (separator, sentinel) in SEPARATORS {
        text = text.replace(sentinel, separator);
    }

    // drop the padding space
    text.pop();
    text
}

/// Upper-case every letter that does not follow another letter
fn title_case(text: &str) -> String {
    let mut previous_is_letter = false;
    text.chars()
        .map(|c| {
            let mapped = if previous_is_letter {
                c.to_lowercase().collect::<String>()
            } else {
                c.to_uppercase().collect::<String>()
            };
            previous_is_letter = c.is_alphabetic();
            mapped
        })
        .collect()
}
