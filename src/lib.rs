//! `graphql-alchemist` - GraphQL boilerplate generator
//!
//! Turns resolver flags such as `-n greet -ap --args id:ID!` into a resolver
//! source file.

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;
