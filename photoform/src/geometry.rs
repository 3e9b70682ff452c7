//! Procedural preview geometry
//!
//! The uploader never runs real reconstruction; it stands in a parametric
//! shape for the scanned object. Two shapes exist: a fixed flat-shaded cube
//! used as the calibration/test asset, and a UV sphere whose tessellation
//! density scales with the number of uploaded images.

use glam::Vec3;
use std::f32::consts::PI;

/// Lower bound for sphere tessellation
pub const MIN_SUBDIVISIONS: u32 = 2;
/// Upper bound for sphere tessellation
pub const MAX_SUBDIVISIONS: u32 = 8;

/// Shape consumed by the preview pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshSource {
    /// Fixed flat-shaded unit cube
    Cube,
    /// UV sphere, `rings = subdivisions`, `sectors = 2 * subdivisions`
    Sphere { subdivisions: u32 },
}

impl MeshSource {
    /// Sphere tessellation derived from the number of uploaded images.
    ///
    /// Every five images buy one extra subdivision level, clamped to
    /// [`MIN_SUBDIVISIONS`]..=[`MAX_SUBDIVISIONS`].
    pub fn sphere_for_image_count(count: usize) -> Self {
        let subdivisions = (2 + count / 5).clamp(
            MIN_SUBDIVISIONS as usize,
            MAX_SUBDIVISIONS as usize,
        ) as u32;
        MeshSource::Sphere { subdivisions }
    }
}

/// Triangle index stream; the width is part of the output contract
/// (the cube table is `u16`, the sphere path is `u32`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexStream {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl IndexStream {
    /// Number of indices in the stream
    pub fn len(&self) -> usize {
        match self {
            IndexStream::U16(indices) => indices.len(),
            IndexStream::U32(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generated triangle mesh, parallel f32 attribute arrays
#[derive(Clone, Debug)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: IndexStream,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate the mesh for a preview source.
///
/// Both shapes are closed surfaces centered at the origin with radius 1.
pub fn generate(source: MeshSource) -> Geometry {
    match source {
        MeshSource::Cube => cube(),
        MeshSource::Sphere { subdivisions } => uv_sphere(subdivisions),
    }
}

/// Corner positions of the unit cube, half extent 1
const CUBE_POSITIONS: [[f32; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

/// Twelve CCW triangles over the shared corners
const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    3, 2, 6, 3, 6, 7, // top
    5, 4, 7, 5, 7, 6, // back
    4, 5, 1, 4, 1, 0, // bottom
    1, 5, 6, 1, 6, 2, // right
    4, 0, 3, 4, 3, 7, // left
];

/// Face normals, four entries per face in index-table face order.
///
/// The legacy preview table keeps the 8 shared corner positions next to 24
/// per-face normal slots. Indices stay below 8, so no consumer reads past
/// either stream; the extra normal entries are pinned by compatibility tests.
const CUBE_NORMALS: [[f32; 3]; 24] = [
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0], // front
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.0], // top
    [0.0, 0.0, -1.0],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, -1.0], // back
    [0.0, -1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, -1.0, 0.0], // bottom
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0], // right
    [-1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0], // left
];

fn cube() -> Geometry {
    Geometry {
        positions: CUBE_POSITIONS.to_vec(),
        normals: CUBE_NORMALS.to_vec(),
        indices: IndexStream::U16(CUBE_INDICES.to_vec()),
    }
}

/// Generate a unit UV sphere with smooth normals.
///
/// Produces `(rings + 1) * (sectors + 1)` vertices. Adjacent rings are joined
/// with two triangles per quad, except at the poles: every ring-0 vertex sits
/// on the north pole and every last-ring vertex on the south pole, so the
/// triangle of each pole quad that collapses to zero area is skipped.
fn uv_sphere(subdivisions: u32) -> Geometry {
    let subdivisions = subdivisions.clamp(MIN_SUBDIVISIONS, MAX_SUBDIVISIONS);
    let rings = subdivisions;
    let sectors = subdivisions * 2;

    let vertex_count = ((rings + 1) * (sectors + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);

    for ring in 0..=rings {
        let phi = ring as f32 / rings as f32 * PI;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for sector in 0..=sectors {
            let theta = sector as f32 / sectors as f32 * 2.0 * PI;
            let position = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());

            positions.push(position.to_array());
            // Unit radius, so the outward normal is the position itself
            normals.push(position.to_array());
        }
    }

    let verts_per_ring = sectors + 1;
    let mut indices = Vec::with_capacity((6 * sectors * (rings - 1)) as usize);
    for ring in 0..rings {
        for sector in 0..sectors {
            let first = ring * verts_per_ring + sector;
            let second = first + verts_per_ring;

            if ring != 0 {
                indices.extend_from_slice(&[first, second, first + 1]);
            }
            if ring != rings - 1 {
                indices.extend_from_slice(&[second, second + 1, first + 1]);
            }
        }
    }

    Geometry {
        positions,
        normals,
        indices: IndexStream::U32(indices),
    }
}
