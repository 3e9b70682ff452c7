//! Preview conversion pipeline
//!
//! Chains the stages end to end: generate geometry, derive vertex colors,
//! pack the attribute streams, describe them with the glTF document, and
//! wrap everything into the GLB container. The pipeline keeps no state
//! between calls, so independent requests can run concurrently.

use crate::buffer::{AccessorIndex, PackedBuffer};
use crate::color;
use crate::document::{self, PreviewMaterial, PrimitiveAccessors};
use crate::geometry::{self, IndexStream, MeshSource};
use crate::glb;
use thiserror::Error;

/// Generator string stamped into the asset block of every document
pub const GENERATOR: &str = concat!("photoform ", env!("CARGO_PKG_VERSION"));

/// One preview conversion request
#[derive(Clone, Debug)]
pub struct PreviewRequest {
    pub source: MeshSource,
    /// One dominant RGB sample per uploaded image, components in [0, 1]
    pub sampled_colors: Vec<[f32; 3]>,
}

impl PreviewRequest {
    /// Sphere preview for a set of uploaded images; tessellation density
    /// follows the image count.
    pub fn scan(sampled_colors: Vec<[f32; 3]>) -> Self {
        Self {
            source: MeshSource::sphere_for_image_count(sampled_colors.len()),
            sampled_colors,
        }
    }

    /// Fixed calibration cube, no sampled colors
    pub fn cube() -> Self {
        Self {
            source: MeshSource::Cube,
            sampled_colors: Vec::new(),
        }
    }
}

/// Failure surface of the conversion pipeline.
///
/// Geometry, coloring, packing, and container assembly are all infallible on
/// pre-clamped inputs; serializing the scene description is the only step
/// that can fail.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to serialize scene description")]
    Serialize(#[from] serde_json::Error),
}

/// Convert a preview request into finished GLB bytes.
pub fn convert(request: &PreviewRequest) -> Result<Vec<u8>, PreviewError> {
    convert_with_progress(request, |_| {})
}

/// Convert, reporting a monotonically increasing 0-100 percentage at coarse
/// stage boundaries. The percentages are advisory UI feedback only.
pub fn convert_with_progress(
    request: &PreviewRequest,
    mut progress: impl FnMut(u8),
) -> Result<Vec<u8>, PreviewError> {
    progress(5);

    let geometry = geometry::generate(request.source);
    tracing::debug!(
        vertices = geometry.vertex_count(),
        triangles = geometry.triangle_count(),
        "generated preview geometry"
    );
    progress(30);

    // The legacy cube table carries no color stream; only scanned previews do.
    let colors = match request.source {
        MeshSource::Sphere { .. } => {
            color::vertex_colors(&request.sampled_colors, geometry.vertex_count())
        }
        MeshSource::Cube => Vec::new(),
    };
    progress(45);

    let mut buffer = PackedBuffer::new();
    let (accessors, material) = match request.source {
        // Legacy cube layout: positions, the index block, then face normals
        MeshSource::Cube => {
            let positions = buffer.pack_positions(&geometry.positions);
            let indices = pack_indices(&mut buffer, &geometry.indices);
            let normals = buffer.pack_normals(&geometry.normals);
            (
                PrimitiveAccessors {
                    positions,
                    normals,
                    colors: None,
                    indices,
                },
                PreviewMaterial::cube(),
            )
        }
        // Scan layout: positions, normals, colors, indices
        MeshSource::Sphere { .. } => {
            let positions = buffer.pack_positions(&geometry.positions);
            let normals = buffer.pack_normals(&geometry.normals);
            let color_accessor = buffer.pack_colors(&colors);
            let indices = pack_indices(&mut buffer, &geometry.indices);
            (
                PrimitiveAccessors {
                    positions,
                    normals,
                    colors: Some(color_accessor),
                    indices,
                },
                PreviewMaterial::generated(),
            )
        }
    };
    tracing::debug!(
        views = buffer.views().len(),
        bytes = buffer.data().len(),
        "packed attribute streams"
    );
    progress(70);

    let root = document::build_document(&buffer, accessors, material, GENERATOR);
    let json_text = glb::serialize_document(&root)?;
    progress(90);

    let bytes = glb::assemble(&json_text, buffer.data());
    tracing::debug!(len = bytes.len(), "assembled GLB container");
    progress(100);

    Ok(bytes)
}

fn pack_indices(buffer: &mut PackedBuffer, indices: &IndexStream) -> AccessorIndex {
    match indices {
        IndexStream::U16(indices) => buffer.pack_indices_u16(indices),
        IndexStream::U32(indices) => buffer.pack_indices_u32(indices),
    }
}
