// Infrastructure layer - External dependencies and adapters
pub mod cft_client;
pub mod config;
pub mod plot_digitizer;
