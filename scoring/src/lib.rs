pub mod analyzer;
pub mod collaborators;
pub mod config;
pub mod model;
pub mod presentation;
pub mod scorer;
