// Pipeline stages: catalog scanning, frequency ranking, layer building,
// and the orchestration wiring them together.

pub mod aggregate;
pub mod layer;
pub mod orchestrator;
pub mod scan;
