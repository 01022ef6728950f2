//! colorwork - greedy first-fit graph coloring
//!
//! colorwork assigns colors to the nodes of an undirected neighbour relation
//! so that no two neighbours share a color. It uses a single first-fit pass:
//! each node joins the earliest color group that holds none of its
//! neighbours, or opens a new one. The result is valid and deterministic but
//! not guaranteed minimal.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - The coloring engine, placement step, and verifier
//! - [`core`] - Domain types, the neighbour relation, partitions, input, config
//! - [`flights`] - Flight record aggregation from CSV
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! For every partition the engine produces:
//!
//! 1. Every node appears in exactly one group
//! 2. No two distinct neighbours share a group
//! 3. No group is empty
//! 4. The same input and options produce the same partition

pub mod cli;
pub mod core;
pub mod engine;
pub mod flights;
pub mod ui;
