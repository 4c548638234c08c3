// src/lib.rs
//! Stack library.

#![deny(missing_docs)]

pub mod cli;
pub mod cloud;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod info;
pub mod input;
pub mod template;
