//! Value canonicalization for HR feed fields
//!
//! Pure functions applied when source records are assembled. None of them
//! fail: an unrepairable value comes back as an empty string (or `None` for
//! the salary plan lookup) and callers treat that as "no confident value".

mod email;
mod phone;
mod position_type;
mod title;

pub use email::repair_email;
pub use phone::repair_phone_number;
pub use position_type::position_type_for_salary_plan;
pub use title::improve_jobcode_description;
