//! core
//!
//! Core domain types and schemas for colorwork.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Node, Edge
//! - [`graph`] - The neighbour relation
//! - [`coloring`] - The partition: ColorGroup, Coloring
//! - [`input`] - Edge list readers
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid identifiers from reaching the engine
//! - Schemas are strict and self-describing

pub mod coloring;
pub mod config;
pub mod graph;
pub mod input;
pub mod types;
