//! Operator helper for the agent dashboard feature: holds the schema
//! migration payload and prints the manual ways to apply it to Supabase.

pub mod cli;
pub mod config;
pub mod errors;
pub mod instructions;
pub mod migration;
