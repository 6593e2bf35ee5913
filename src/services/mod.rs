pub mod catalog_renderer;
pub mod catalog_repository;
pub mod completion_service;
pub mod plan_generator;
pub mod prompt_builder;
pub mod trip_plan_service;
