#![cfg_attr(not(test), no_std)]

pub mod accessors;
pub mod anchor_compat;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod instruction_layouts;
pub mod layouts;
pub mod processors;
pub mod runtime;
