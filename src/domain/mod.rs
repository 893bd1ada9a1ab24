// Domain layer - pure data models, no I/O
pub mod graph;
pub mod request;
pub mod series;
pub mod station;
pub mod window;
