#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod type_path_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use type_path_map::TypePathMap;
