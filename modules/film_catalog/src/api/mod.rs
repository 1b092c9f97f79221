//! API layer - REST surface and the native in-process client

pub mod native;
pub mod rest;
