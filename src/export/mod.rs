//! Export formats for chest geometry.

pub mod json;
pub mod obj;

pub use json::{model_table_json, variant_json};
pub use obj::{export_obj, ObjExport};
