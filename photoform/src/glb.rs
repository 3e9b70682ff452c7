//! GLB container assembly
//!
//! Wire layout: a 12-byte file header (`glTF` magic, version 2, total length)
//! followed by exactly two chunks, each with an 8-byte header of little-endian
//! padded length plus type tag. The JSON chunk is padded to a 4-byte boundary
//! with ASCII spaces, the binary chunk with zero bytes. Padding is invisible
//! to every buffer view and accessor.

use gltf_json as json;

/// File magic, first four bytes of every container
pub const GLB_MAGIC: [u8; 4] = *b"glTF";
/// Container format version
pub const GLB_VERSION: u32 = 2;
/// JSON chunk type tag ("JSON")
pub const CHUNK_JSON: u32 = 0x4E4F534A;
/// Binary chunk type tag ("BIN\0")
pub const CHUNK_BIN: u32 = 0x004E4942;

/// File header size; chunk 0 starts immediately after
pub const HEADER_LEN: usize = 12;
/// Chunk header size (length + type tag)
pub const CHUNK_HEADER_LEN: usize = 8;

/// Bytes needed to reach the next 4-byte boundary
fn padding_for(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Serialize the scene description to JSON text.
pub fn serialize_document(root: &json::Root) -> Result<String, serde_json::Error> {
    json::serialize::to_string(root)
}

/// Wrap the JSON text and the packed binary payload into a GLB byte stream.
pub fn assemble(json_text: &str, payload: &[u8]) -> Vec<u8> {
    let json_bytes = json_text.as_bytes();
    let json_padding = padding_for(json_bytes.len());
    let json_chunk_len = json_bytes.len() + json_padding;

    let payload_padding = padding_for(payload.len());
    let payload_chunk_len = payload.len() + payload_padding;

    let total_len =
        HEADER_LEN + CHUNK_HEADER_LEN + json_chunk_len + CHUNK_HEADER_LEN + payload_chunk_len;

    let mut glb = Vec::with_capacity(total_len);

    glb.extend_from_slice(&GLB_MAGIC);
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&(total_len as u32).to_le_bytes());

    glb.extend_from_slice(&(json_chunk_len as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    for _ in 0..json_padding {
        glb.push(0x20);
    }

    glb.extend_from_slice(&(payload_chunk_len as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    glb.extend_from_slice(payload);
    for _ in 0..payload_padding {
        glb.push(0);
    }

    glb
}
