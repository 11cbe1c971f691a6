pub mod analytics;
pub mod glossary;
pub mod holding;
pub mod portfolio;
pub mod settings;
