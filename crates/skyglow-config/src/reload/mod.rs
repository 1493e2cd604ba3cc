//! Live config reload manager.
//!
//! Combines the file watcher with config loading to republish the config
//! whenever the file changes on disk.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ReloadManager;
