//! Application layer for the ordering engine

pub mod service;
