//! Attribute packing into the single binary payload
//!
//! Every attribute array is appended to one little-endian byte buffer and
//! described by a buffer view plus an accessor. Views are laid out strictly
//! back-to-back: the offset of each view equals the summed length of every
//! view packed before it. Alignment padding is applied once to the whole
//! chunk by the container assembler, never between views.

use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index handed to the scene description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn to_json(self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Gapless packer for the preview mesh attribute streams
pub struct PackedBuffer {
    data: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl PackedBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Raw packed bytes, unpadded
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Pack vertex positions, declaring min/max bounds computed from the data
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(positions),
            json::buffer::Target::ArrayBuffer,
        );
        let (min, max) = compute_bounds(positions);
        self.push_accessor(
            view,
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some(bounds_value(min)),
            Some(bounds_value(max)),
        )
    }

    /// Pack vertex normals
    pub fn pack_normals(&mut self, normals: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(normals),
            json::buffer::Target::ArrayBuffer,
        );
        self.push_accessor(
            view,
            normals.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            None,
            None,
        )
    }

    /// Pack RGBA vertex colors
    pub fn pack_colors(&mut self, colors: &[[f32; 4]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(colors),
            json::buffer::Target::ArrayBuffer,
        );
        self.push_accessor(
            view,
            colors.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec4,
            None,
            None,
        )
    }

    /// Pack u16 triangle indices (fixed cube table)
    pub fn pack_indices_u16(&mut self, indices: &[u16]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(indices),
            json::buffer::Target::ElementArrayBuffer,
        );
        self.push_accessor(
            view,
            indices.len(),
            json::accessor::ComponentType::U16,
            json::accessor::Type::Scalar,
            None,
            None,
        )
    }

    /// Pack u32 triangle indices (sphere path)
    pub fn pack_indices_u32(&mut self, indices: &[u32]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(indices),
            json::buffer::Target::ElementArrayBuffer,
        );
        self.push_accessor(
            view,
            indices.len(),
            json::accessor::ComponentType::U32,
            json::accessor::Type::Scalar,
            None,
            None,
        )
    }

    /// Append raw bytes and record the covering view. Returns the view index.
    fn push_view(&mut self, bytes: &[u8], target: json::buffer::Target) -> u32 {
        let offset = self.data.len();
        self.data.extend_from_slice(bytes);

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: bytes.len().into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });
        self.views.len() as u32 - 1
    }

    fn push_accessor(
        &mut self,
        view: u32,
        count: usize,
        component_type: json::accessor::ComponentType,
        type_: json::accessor::Type,
        min: Option<json::Value>,
        max: Option<json::Value>,
    ) -> AccessorIndex {
        let index = AccessorIndex(self.accessors.len() as u32);
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(view)),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component_type)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });
        index
    }
}

impl Default for PackedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Componentwise bounding box of the position stream
pub fn compute_bounds(positions: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for position in positions {
        for axis in 0..3 {
            min[axis] = min[axis].min(position[axis]);
            max[axis] = max[axis].max(position[axis]);
        }
    }

    (min, max)
}

fn bounds_value(bound: [f32; 3]) -> json::Value {
    json::Value::Array(bound.iter().copied().map(json::Value::from).collect())
}
