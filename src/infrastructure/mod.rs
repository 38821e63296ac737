pub mod fields;
pub mod reporters;
