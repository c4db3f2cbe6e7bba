pub mod cd;
pub mod error;
pub mod slots;
pub mod track;
