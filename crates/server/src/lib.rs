pub mod cmo;
pub mod config;
pub mod docmosis;
pub mod health;
pub mod notify;
pub mod openapi;
pub mod rest;
pub mod state;
pub mod telemetry;
