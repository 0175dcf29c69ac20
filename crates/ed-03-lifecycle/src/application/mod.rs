//! Application layer for the lifecycle engine

pub mod service;
