// ABOUTME: Library crate for aristo-setup exposing the wizard engine, overlay tracker and TUI

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod overlay;
pub mod wizard;
