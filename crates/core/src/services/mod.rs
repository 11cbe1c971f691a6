pub mod analytics_service;
pub mod calculator_service;
pub mod currency_service;
pub mod glossary_service;
pub mod portfolio_service;
pub mod price_service;
pub mod suggestion_service;
pub mod validation;
