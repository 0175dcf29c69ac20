//! # Integration Flows
//!
//! Every flow drives a fully wired `EditorialConsole` over the in-memory
//! store, then inspects the store's records and call log directly.

#[cfg(test)]
mod concurrency;
#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod flows;
#[cfg(test)]
mod partial_failures;
#[cfg(test)]
mod properties;
