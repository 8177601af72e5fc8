pub mod evaluator;
pub mod toyff;
