// Application layer - use cases and collaborator boundaries
pub mod chart_source;
pub mod coordinate_mapper;
pub mod curve_extractor;
pub mod digitizer_service;
pub mod preprocess;
pub mod station_data_service;
