#![doc = "The `project-api` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, persistence layer, routing"]
#![doc = "configuration, and error handling for the Task Management Tool."]
#![doc = "It is used by the main binary (`main.rs`) to construct and run the server."]

pub mod config;
pub mod db;
pub mod deadline;
pub mod error;
pub mod models;
pub mod routes;
