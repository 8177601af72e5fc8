pub mod domain;
pub mod spatial;
pub mod validation;
