pub mod config;
pub mod logging;

// Matching engine
pub mod engine;
pub mod matcher;
pub mod model;
pub mod stats;
pub mod url_model;

// Plumbing around the engine
pub mod ingest;
pub mod report;
