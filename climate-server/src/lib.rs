//! Climate observation API server.
//!
//! A read-only JSON API over a fixed dataset of weather stations and their
//! daily precipitation and temperature measurements.

pub mod config;
pub mod store;
pub mod web;
