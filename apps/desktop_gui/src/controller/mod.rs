//! Controller layer: UI actions, model mutation, and outcome-to-feedback mapping.

pub mod actions;
pub mod events;
