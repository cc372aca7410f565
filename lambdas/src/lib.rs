//! Lambda function that records the headers of an inbound HTTP request as a
//! single item in a DynamoDB table and answers with a plain status response.

pub mod common;
pub mod config;
pub mod gateway;
pub mod handler;
pub mod record;
pub mod store;
