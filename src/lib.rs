//! # nnindex
//!
//! `nnindex` is a Rust library for nearest-neighbor queries over a static set of 2D points,
//! designed to be used in Rust as well as compiled to WebAssembly (WASM). Points are indexed once
//! in a balanced k-d tree, after which each query walks the tree and prunes every subtree that
//! cannot hold a closer point.
//!
//! ## Features
//!
//! - **k-d tree**: Median splits on alternating axes give a tree of logarithmic depth.
//! - **Swappable search**: The tree and a brute-force linear scan share one interface, so results
//!   can be cross-checked and benchmarked without touching caller code.
//! - **Batch queries**: Many queries can be answered in parallel with `rayon`.
//! - **WASM-first**: Built with `wasm-bindgen` for use from JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use nnindex::build_index;
//!
//! let index = build_index(vec![[1.0, 1.0], [2.0, 3.0], [4.0, 2.0], [5.0, 6.0], [6.0, 1.0]]);
//! assert_eq!(index.find_nearest(&[3.0, 4.0]), Some([2.0, 3.0]));
//! ```
//!
//! See the `demos/` directory for a command line driver and SVG plotting.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`NearestNeighborIndex`] struct, which owns the points and
//! the search strategy.

mod bounds;
mod error;
mod index;
pub mod algorithm;
pub mod point;
pub mod wasm;

pub use algorithm::Algorithm;
pub use algorithm::AlgorithmKdTree;
pub use algorithm::AlgorithmLinear;
pub use algorithm::NearestAlgorithm;
pub use algorithm::Strategy;
pub use algorithm::linear::find_nearest_linear;
pub use bounds::BoundingBox;
pub use error::IndexError;
pub use index::NearestNeighborIndex;
pub use index::build_index;
pub use index::find_nearest;
pub use point::Point;
