pub mod analytics;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod intake_form;
pub mod notification;
pub mod roi;
pub mod routes;
pub mod startup;
pub mod telemetry;
mod utils;
