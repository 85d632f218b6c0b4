#![doc = include_str!("../README.md")]

#[macro_use]
pub mod macros;

pub mod client;
pub mod monitor;
pub mod notify;
pub mod prelude;
pub mod service;

pub use client::{ClientError, RestClient};
