#![cfg_attr(not(test), no_std)]
#[cfg(test)]
extern crate std;
extern crate alloc;

pub mod app;
pub mod compat;
pub mod config;
pub mod error;
pub mod gio;
pub mod log;
pub mod mem;
pub mod rtos;

pub use paste;
