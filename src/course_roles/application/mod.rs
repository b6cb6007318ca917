pub mod command_services;
pub mod events;
pub mod listeners;
pub mod observers;
pub mod query_services;
