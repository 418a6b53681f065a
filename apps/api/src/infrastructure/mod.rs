// Infrastructure layer module
// Contains database adapters, logging setup and store selection
// Follows Hexagonal Architecture

pub mod database;
pub mod logging;
pub mod repositories;
