pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod optimizer;
pub mod render;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).
