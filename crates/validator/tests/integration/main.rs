//! Integration tests for filegate-validator.

mod corpus;
mod matcher;
mod pipeline;
mod registry;
mod rules;
