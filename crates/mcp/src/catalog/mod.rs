//! Immutable catalog tables backing every tool response.
//!
//! Built once at first use and never mutated; each request reads from these
//! constants and returns a derived string.

pub mod nodes;
pub mod tools;
pub mod workflows;

pub use nodes::{NodeType, all_nodes, categories, find_node};
pub use tools::{ToolDescriptor, tool_descriptors};
pub use workflows::{template, template_names, workflow_seed, workflow_seed_names};
