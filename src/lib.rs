//! # IFC Takeoff
//!
//! A terminal-based quantity takeoff tool for building element data.
//!
//! ## Features
//!
//! - Load materialized element models (class, name, hints, property sets)
//! - Resolve type identity with a scored-candidate heuristic
//! - Resolve quantities via locale-tolerant, synonym-based matching
//! - Aggregate per (category, type) and merge with user classifications
//! - Assign hierarchical chapter codes on save
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use ifc_takeoff::loader::load_model;
//! use ifc_takeoff::resolve::aggregate;
//!
//! let model = load_model("office.takeoff.json").expect("Failed to load");
//! let groups = aggregate(&model.objects);
//! println!("Project: {}", model.name);
//! println!("Groups: {}", groups.len());
//! ```

pub mod classify;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod ui;
