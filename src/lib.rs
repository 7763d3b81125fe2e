#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use bp_reflect as reflect;
pub use bp_utils as utils;
