// ABOUTME: Persistence layer for adrsmith, storing rendered ADRs as flat Markdown files.
// ABOUTME: Provides the AdrStore registry with save and list over one injected root directory.

pub mod registry;

pub use registry::{AdrStore, StoreError, StoredAdr};
