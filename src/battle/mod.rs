pub mod calculators;
pub mod damage_rules;
pub mod effectiveness;
pub mod rng;
pub mod selectors;
pub mod service;
pub mod state;
pub mod turn_orchestrator;

#[cfg(test)]
mod tests;
