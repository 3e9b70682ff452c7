//! photoform - procedural preview meshes and GLB encoding
//!
//! The image uploader shows a quick 3D preview instead of running real
//! reconstruction: a parametric mesh (fixed cube or UV sphere) is colored
//! from per-image dominant colors, its attribute streams are packed into a
//! single binary payload, and the result is wrapped into a self-contained
//! GLB that any glTF 2.0 viewer opens.
//!
//! # Example
//!
//! ```
//! use photoform::{convert, PreviewRequest};
//!
//! let request = PreviewRequest::scan(vec![[0.6, 0.4, 0.2]]);
//! let glb = convert(&request).unwrap();
//! assert_eq!(&glb[0..4], b"glTF");
//! ```

pub mod buffer;
pub mod color;
pub mod convert;
pub mod document;
pub mod geometry;
pub mod glb;

pub use buffer::{compute_bounds, AccessorIndex, PackedBuffer};
pub use color::{vertex_colors, DEFAULT_COLOR};
pub use convert::{convert, convert_with_progress, PreviewError, PreviewRequest, GENERATOR};
pub use document::{build_document, PreviewMaterial, PrimitiveAccessors};
pub use geometry::{generate, Geometry, IndexStream, MeshSource};
pub use glb::{assemble, serialize_document, CHUNK_BIN, CHUNK_JSON, GLB_MAGIC, GLB_VERSION};

// Re-export commonly used gltf-json types
pub use gltf_json as json;
