// ABOUTME: Intelligence algorithm types re-exported by the engine crate
// ABOUTME: Contains OneRepMaxFormula for maximal strength estimation

/// One-rep-max estimation formulas
pub mod one_rep_max;

pub use one_rep_max::OneRepMaxFormula;
