pub mod app;
pub mod config;
pub mod consts;
pub mod corpus;
pub mod errors;
pub mod fallback;
pub mod handlers;
pub mod llm_client;
pub mod matcher;
pub mod models;
pub mod service;
pub mod similarity;

#[cfg(test)]
pub(crate) mod test_utils;
