//! Flat vertex and index buffers
//!
//! Per-ring data is packed ring-major, then vertex, then component:
//! `[r0v0.x, r0v0.y, r0v0.z, r0v1.x, ...]`. Positions, normals and colors
//! share this layout, so floats `3k..3k + 3` of each buffer describe the
//! same vertex `k`.

use bytemuck::cast_slice;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{WormholeError, WormholeResult};
use crate::gradient::ColorTable;
use crate::tunnel::Tunnel;

/// Float components per vertex attribute (x/y/z or r/g/b)
pub const COMPONENTS: usize = 3;

/// Finished mesh ready for upload as an indexed triangle list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions, 3 floats per vertex
    pub positions: Vec<f32>,
    /// Vertex normals, 3 floats per vertex (raw, not unit length)
    pub normals: Vec<f32>,
    /// Vertex colors, 3 floats per vertex in `[0, 1]`
    pub colors: Vec<f32>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / COMPONENTS
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * COMPONENTS..])
    }

    /// Normal of vertex `i`
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[i * COMPONENTS..])
    }

    /// Color of vertex `i` as `[r, g, b]`
    #[inline]
    pub fn color(&self, i: usize) -> [f32; 3] {
        let base = i * COMPONENTS;
        [self.colors[base], self.colors[base + 1], self.colors[base + 2]]
    }

    /// Position buffer as raw bytes (native endian f32)
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes (native endian f32)
    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    /// Color buffer as raw bytes (native endian f32)
    pub fn color_bytes(&self) -> &[u8] {
        cast_slice(&self.colors)
    }

    /// Index buffer as raw bytes (native endian u32)
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Validates buffer consistency.
    ///
    /// Checks:
    /// - Attribute buffers are whole vertices and share one length
    /// - Index count is a multiple of 3
    /// - Every index is in range
    pub fn validate(&self) -> WormholeResult<()> {
        if self.positions.len() % COMPONENTS != 0 {
            return Err(WormholeError::invalid(
                "position buffer length is not divisible by 3",
            ));
        }
        if self.normals.len() != self.positions.len() {
            return Err(WormholeError::invalid(format!(
                "normal buffer length ({}) != position buffer length ({})",
                self.normals.len(),
                self.positions.len()
            )));
        }
        if self.colors.len() != self.positions.len() {
            return Err(WormholeError::invalid(format!(
                "color buffer length ({}) != position buffer length ({})",
                self.colors.len(),
                self.positions.len()
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(WormholeError::invalid("index count is not divisible by 3"));
        }

        let n = self.vertex_count();
        if let Some((i, &idx)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &idx)| idx as usize >= n)
        {
            return Err(WormholeError::invalid(format!(
                "index {} at position {} is out of range (vertex count: {})",
                idx, i, n
            )));
        }

        Ok(())
    }
}

/// Flatten per-ring vectors into one float sequence, ring-major
pub fn flatten<'a, I>(rings: I) -> Vec<f32>
where
    I: IntoIterator<Item = &'a [Vec3]>,
{
    let mut flat = Vec::new();
    for ring in rings {
        flat.extend_from_slice(cast_slice::<Vec3, f32>(ring)); // [Vec3] → [f32]
    }
    flat
}

/// Flattened positions of every ring
pub fn flatten_positions(tunnel: &Tunnel) -> Vec<f32> {
    flatten(tunnel.rings.iter().map(|ring| ring.positions.as_slice()))
}

/// Flattened normals of every ring
pub fn flatten_normals(tunnel: &Tunnel) -> Vec<f32> {
    flatten(tunnel.rings.iter().map(|ring| ring.normals.as_slice()))
}

/// Broadcast each ring's color to its `ring_subdivs` vertices and flatten
pub fn flatten_colors(table: &ColorTable, ring_subdivs: u32) -> Vec<f32> {
    let per_ring = ring_subdivs as usize;
    let mut flat = Vec::with_capacity(table.len() * per_ring * COMPONENTS);
    for color in table {
        let rgb = color.to_array();
        for _ in 0..per_ring {
            flat.extend_from_slice(&rgb);
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_flatten_is_ring_major() {
        let ring0 = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let ring1 = [Vec3::new(7.0, 8.0, 9.0), Vec3::new(10.0, 11.0, 12.0)];
        let flat = flatten([&ring0[..], &ring1[..]]);
        let expected: Vec<f32> = (1..=12).map(|v| v as f32).collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_flatten_colors_broadcasts() {
        let table = vec![Rgb::new(0.1, 0.2, 0.3), Rgb::new(0.4, 0.5, 0.6)];
        let flat = flatten_colors(&table, 3);
        assert_eq!(flat.len(), 2 * 3 * 3);
        assert_eq!(&flat[0..9], &[0.1, 0.2, 0.3, 0.1, 0.2, 0.3, 0.1, 0.2, 0.3]);
        assert_eq!(&flat[9..12], &[0.4, 0.5, 0.6]);
    }

    fn triangle() -> MeshBuffers {
        MeshBuffers {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            normals: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            colors: vec![1.0; 9],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_accessors() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.position(1), Vec3::X);
        assert_eq!(mesh.normal(2), Vec3::Z);
        assert_eq!(mesh.color(0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_byte_views() {
        let mesh = triangle();
        assert_eq!(mesh.position_bytes().len(), 9 * 4);
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
        assert_eq!(&mesh.index_bytes()[4..8], &1u32.to_ne_bytes());
    }

    #[test]
    fn test_validate_ok() {
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn test_validate_catches_inconsistent_lengths() {
        let mut mesh = triangle();
        mesh.colors.pop();
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_validate_catches_oob_index() {
        let mut mesh = triangle();
        mesh.indices[2] = 3;
        assert!(mesh.validate().is_err());
    }
}
