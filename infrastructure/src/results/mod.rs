//! Persistence of batch results

mod json_store;

pub use json_store::JsonResultStore;
