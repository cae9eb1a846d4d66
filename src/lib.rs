//! Terminal viewer for a catalog of training courses and conferences.
//!
//! The pipeline is `catalog` (load) → `facets` (index) → `filter` →
//! `view_model` (pure projections) → `components` (ratatui drawing), all
//! driven by the command handlers on [`app::App`].

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod event;
pub mod facets;
pub mod filter;
pub mod theme;
pub mod tui;
pub mod view_model;
