// ABOUTME: Core library for adrsmith, containing the input model and pure rendering.
// ABOUTME: This crate defines the shared data model used across all adrsmith components.

pub mod adr_id;
pub mod format;
pub mod input;
pub mod prompt;
pub mod template;

pub use adr_id::AdrId;
pub use input::{
    AdrInputs, ApplicationContext, DatabaseContext, InfrastructureContext, InputError,
    TradeoffDimension,
};
