// ABOUTME: Intelligence algorithm types shared across workspace crates
// ABOUTME: Hosts the one-rep-max formula selection used by the engine and configuration

/// Strength estimation algorithms
pub mod algorithms;
