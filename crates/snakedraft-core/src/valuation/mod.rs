// Valuation engine: scoring, projections, VBD, needs, and pick recommendations.

pub mod needs;
pub mod projections;
pub mod recommend;
pub mod scarcity;
pub mod scoring;
pub mod strategy;
pub mod value;
pub mod vbd;
