//! Ports (trait boundaries) between the solver core and its callers.

pub mod agent;

pub use agent::Agent;
