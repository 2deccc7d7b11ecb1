use bytemuck::{Pod, Zeroable};
use noiseplane_math::{Vec2, Vec3};
use serde::Serialize;

/// Default tessellation: 5 segments per half axis, a 10x10 cell grid.
pub const DEFAULT_SEGMENTS: u32 = 5;

/// Interleaved vertex as uploaded to the vertex buffer: 32 bytes, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// Errors from plane tessellation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("plane needs at least one segment")]
    NoSegments,
    #[error("{segments} segments need {vertices} vertices, more than u32 indices can address")]
    TooManySegments { segments: u32, vertices: u64 },
    #[error("{segments} segments need {indices} indices, more than a u32 count can hold")]
    TooManyIndices { segments: u32, indices: u64 },
}

/// Flat index of grid vertex (`x`, `z`), both in `0..=2 * segments`.
///
/// Vertices are laid out x-major: all of column x = 0 first, then x = 1.
pub fn plane_vertex_index(x: u32, z: u32, segments: u32) -> u32 {
    x * (segments * 2 + 1) + z
}

/// Tessellated unit plane spanning [-1, 1] on X and Z at y = 0.
///
/// Each grid cell is two triangles sharing the cell's (x, z) to
/// (x + 1, z + 1) diagonal. All triangles wind the same way.
#[derive(Debug, Clone, Serialize)]
pub struct PlaneMesh {
    segments: u32,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl PlaneMesh {
    /// Build the plane with `segments` subdivisions per half axis.
    pub fn generate(segments: u32) -> Result<Self, MeshError> {
        if segments == 0 {
            return Err(MeshError::NoSegments);
        }
        let side = u64::from(segments) * 2 + 1;
        let vertex_count = side * side;
        if vertex_count > u64::from(u32::MAX) {
            return Err(MeshError::TooManySegments {
                segments,
                vertices: vertex_count,
            });
        }
        let index_count = (side - 1) * (side - 1) * 6;
        if index_count > u64::from(u32::MAX) {
            return Err(MeshError::TooManyIndices {
                segments,
                indices: index_count,
            });
        }

        let half = segments as i32;
        let s = segments as f32;
        let mut vertices = Vec::with_capacity(vertex_count as usize);
        for i in -half..=half {
            for j in -half..=half {
                vertices.push(Vertex {
                    position: Vec3::new(i as f32 / s, 0.0, j as f32 / s),
                    normal: Vec3::Y,
                    uv: Vec2::new(i as f32 / (2.0 * s) + 0.5, j as f32 / (2.0 * s) + 0.5),
                });
            }
        }

        let cells = segments * 2;
        let mut indices = Vec::with_capacity(index_count as usize);
        for i in 0..cells {
            for j in 0..cells {
                let at = |x, z| plane_vertex_index(x, z, segments);
                indices.extend_from_slice(&[
                    at(i, j),
                    at(i + 1, j),
                    at(i + 1, j + 1),
                    at(i, j),
                    at(i + 1, j + 1),
                    at(i, j + 1),
                ]);
            }
        }

        tracing::debug!(
            segments,
            vertices = vertices.len(),
            indices = indices.len(),
            "generated plane mesh"
        );

        Ok(Self {
            segments,
            vertices,
            indices,
        })
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Vertex data ready for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as 32-bit unsigned integers.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Positions of each triangle's three corners, in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize].position,
                self.vertices[tri[1] as usize].position,
                self.vertices[tri[2] as usize].position,
            ]
        })
    }
}
