//! Scene description assembly
//!
//! Builds the typed glTF document for a preview: exactly one scene holding
//! one node, one mesh with a single triangle primitive, and one
//! metallic-roughness material. Buffer views and accessors come straight from
//! the packer so the document always references the real byte layout.

use crate::buffer::{AccessorIndex, PackedBuffer};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Accessor wiring for the single preview primitive
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveAccessors {
    pub positions: AccessorIndex,
    pub normals: AccessorIndex,
    /// Only the scan path carries vertex colors
    pub colors: Option<AccessorIndex>,
    pub indices: AccessorIndex,
}

/// Fixed metallic-roughness material description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewMaterial {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

impl PreviewMaterial {
    /// Material for meshes generated from sampled images
    pub fn generated() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
            metallic: 0.3,
            roughness: 0.7,
        }
    }

    /// Material for the fixed calibration cube
    pub fn cube() -> Self {
        Self {
            base_color: [0.5, 0.5, 0.5, 1.0],
            metallic: 0.5,
            roughness: 0.5,
        }
    }
}

/// Assemble the complete glTF root for one packed preview mesh.
pub fn build_document(
    buffer: &PackedBuffer,
    accessors: PrimitiveAccessors,
    material: PreviewMaterial,
    generator: &str,
) -> json::Root {
    let mut attributes = BTreeMap::new();
    attributes.insert(
        Valid(json::mesh::Semantic::Positions),
        accessors.positions.to_json(),
    );
    attributes.insert(
        Valid(json::mesh::Semantic::Normals),
        accessors.normals.to_json(),
    );
    if let Some(colors) = accessors.colors {
        attributes.insert(Valid(json::mesh::Semantic::Colors(0)), colors.to_json());
    }

    let primitive = json::mesh::Primitive {
        attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices: Some(accessors.indices.to_json()),
        material: Some(json::Index::new(0)),
        mode: Valid(json::mesh::Mode::Triangles),
        targets: None,
    };

    let mesh = json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some("Preview".to_string()),
        primitives: vec![primitive],
        weights: None,
    };

    let node = json::Node {
        camera: None,
        children: None,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh: Some(json::Index::new(0)),
        name: Some("Preview".to_string()),
        rotation: None,
        scale: None,
        skin: None,
        translation: None,
        weights: None,
    };

    let scene = json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some("Scene".to_string()),
        nodes: vec![json::Index::new(0)],
    };

    let material = json::Material {
        name: Some("PreviewMaterial".to_string()),
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_factor: json::material::PbrBaseColorFactor(material.base_color),
            metallic_factor: json::material::StrengthFactor(material.metallic),
            roughness_factor: json::material::StrengthFactor(material.roughness),
            ..Default::default()
        },
        ..Default::default()
    };

    let buffers = vec![json::Buffer {
        byte_length: buffer.data().len().into(),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        uri: None,
    }];

    json::Root {
        accessors: buffer.accessors().to_vec(),
        animations: Vec::new(),
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some(generator.to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers,
        buffer_views: buffer.views().to_vec(),
        cameras: Vec::new(),
        extensions: Default::default(),
        extensions_required: Vec::new(),
        extensions_used: Vec::new(),
        extras: Default::default(),
        images: Vec::new(),
        materials: vec![material],
        meshes: vec![mesh],
        nodes: vec![node],
        samplers: Vec::new(),
        scene: Some(json::Index::new(0)),
        scenes: vec![scene],
        skins: Vec::new(),
        textures: Vec::new(),
    }
}
