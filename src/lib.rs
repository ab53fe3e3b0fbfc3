pub mod api;
pub mod catalog;
pub mod engine;
pub mod entities;
pub mod error;
pub mod history;
pub mod pricing;
