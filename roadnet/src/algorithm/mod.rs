pub mod classification;
pub mod deduplication;
pub mod junction;
pub mod normalization;
