//! Vertex and index tables for the demos.
//!
//! Every vertex type implements [`Vertex`], which describes how its fields are packed in a
//! buffer. The layout has to agree with the `layout(location = N)` inputs of the matching vertex
//! shader, the GPU side reads the buffer through it blindly.

use std::{fmt, mem};

/// One floating point attribute slot inside a vertex record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location.
    pub location: u32,
    /// Number of `f32` components (1 to 4).
    pub components: i32,
    /// Byte offset from the start of the record.
    pub offset: i32,
}

/// Byte layout of a vertex record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: i32,
    pub attributes: &'static [VertexAttribute],
}

impl VertexLayout {
    /// Number of bytes actually covered by the attributes.
    pub fn attribute_bytes(&self) -> i32 {
        self.attributes
            .iter()
            .map(|a| a.components * mem::size_of::<f32>() as i32)
            .sum()
    }
}

/// Trait implemented by every vertex type that can be uploaded.
pub trait Vertex: Copy {
    const LAYOUT: VertexLayout;
}

/// Vertex of the 2D quad: clip space position and texture coordinate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

impl Vertex for QuadVertex {
    const LAYOUT: VertexLayout = VertexLayout {
        stride: mem::size_of::<Self>() as i32,
        attributes: &[
            VertexAttribute {
                location: 0,
                components: 2,
                offset: mem::offset_of!(QuadVertex, position) as i32,
            },
            VertexAttribute {
                location: 1,
                components: 2,
                offset: mem::offset_of!(QuadVertex, tex_coord) as i32,
            },
        ],
    };
}

/// Vertex of the 3D cube: object space position, face normal and texture coordinate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex for CubeVertex {
    const LAYOUT: VertexLayout = VertexLayout {
        stride: mem::size_of::<Self>() as i32,
        attributes: &[
            VertexAttribute {
                location: 0,
                components: 3,
                offset: mem::offset_of!(CubeVertex, position) as i32,
            },
            VertexAttribute {
                location: 1,
                components: 3,
                offset: mem::offset_of!(CubeVertex, normal) as i32,
            },
            VertexAttribute {
                location: 2,
                components: 2,
                offset: mem::offset_of!(CubeVertex, tex_coord) as i32,
            },
        ],
    };
}

const fn quad(position: [f32; 2], tex_coord: [f32; 2]) -> QuadVertex {
    QuadVertex {
        position,
        tex_coord,
    }
}

pub const QUAD_VERTICES: [QuadVertex; 4] = [
    quad([-0.5, -0.5], [0.0, 0.0]), // bottom left
    quad([0.5, -0.5], [1.0, 0.0]),  // bottom right
    quad([0.5, 0.5], [1.0, 1.0]),   // top right
    quad([-0.5, 0.5], [0.0, 1.0]),  // top left
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

const fn cube(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> CubeVertex {
    CubeVertex {
        position,
        normal,
        tex_coord,
    }
}

/// Four vertices per face, listed bottom left, bottom right, top right, top left as seen from
/// outside the cube.
pub const CUBE_VERTICES: [CubeVertex; 24] = [
    // front (+z)
    cube([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    cube([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    cube([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    cube([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    // back (-z)
    cube([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    cube([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
    cube([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    cube([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
    // left (-x)
    cube([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    cube([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    cube([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    cube([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    // right (+x)
    cube([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    cube([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    cube([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    cube([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    // top (+y)
    cube([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    cube([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    cube([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    cube([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    // bottom (-y)
    cube([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    cube([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    cube([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    cube([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
];

pub const CUBE_INDICES: [u32; 36] = face_indices();

const fn face_indices() -> [u32; 36] {
    let mut indices = [0; 36];
    let mut face = 0;
    while face < 6 {
        let base = face as u32 * 4;
        let i = face * 6;
        indices[i] = base;
        indices[i + 1] = base + 1;
        indices[i + 2] = base + 2;
        indices[i + 3] = base;
        indices[i + 4] = base + 2;
        indices[i + 5] = base + 3;
        face += 1;
    }
    indices
}

/// Problems an index list can have with respect to its vertex table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The index count is not a multiple of three.
    IncompleteTriangle { len: usize },
    /// An index points past the end of the vertex table.
    IndexOutOfBounds {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::IncompleteTriangle { len } => {
                write!(f, "{len} indices do not form whole triangles")
            }
            GeometryError::IndexOutOfBounds {
                position,
                index,
                vertex_count,
            } => write!(
                f,
                "index {index} at position {position} is out of bounds for {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Checks that `indices` describes whole triangles that stay within `vertex_count` vertices.
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<(), GeometryError> {
    if indices.len() % 3 != 0 {
        return Err(GeometryError::IncompleteTriangle { len: indices.len() });
    }
    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index as usize >= vertex_count)
    {
        return Err(GeometryError::IndexOutOfBounds {
            position,
            index,
            vertex_count,
        });
    }
    Ok(())
}

/// Signed area of a 2D triangle, positive when counter-clockwise.
pub fn signed_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]))
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn contains(tri: [[f32; 2]; 3], p: [f32; 2]) -> bool {
        let d1 = signed_area(tri[0], tri[1], p);
        let d2 = signed_area(tri[1], tri[2], p);
        let d3 = signed_area(tri[2], tri[0], p);
        d1 > 0.0 && d2 > 0.0 && d3 > 0.0
    }

    fn quad_triangles() -> Vec<[[f32; 2]; 3]> {
        QUAD_INDICES
            .chunks(3)
            .map(|t| {
                [
                    QUAD_VERTICES[t[0] as usize].position,
                    QUAD_VERTICES[t[1] as usize].position,
                    QUAD_VERTICES[t[2] as usize].position,
                ]
            })
            .collect()
    }

    #[test]
    fn test_layout_strides_match_records() {
        assert_eq!(QuadVertex::LAYOUT.stride, 16);
        assert_eq!(CubeVertex::LAYOUT.stride, 32);
        assert_eq!(QuadVertex::LAYOUT.attribute_bytes(), QuadVertex::LAYOUT.stride);
        assert_eq!(CubeVertex::LAYOUT.attribute_bytes(), CubeVertex::LAYOUT.stride);

        let offsets: Vec<i32> = CubeVertex::LAYOUT.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
        let locations: Vec<u32> = CubeVertex::LAYOUT
            .attributes
            .iter()
            .map(|a| a.location)
            .collect();
        assert_eq!(locations, vec![0, 1, 2]);
        assert_eq!(QuadVertex::LAYOUT.attributes[1].offset, 8);
    }

    #[test]
    fn test_cube_indices_in_bounds() {
        assert_eq!(CUBE_VERTICES.len(), 24);
        assert_eq!(CUBE_INDICES.len(), 36);
        assert!(CUBE_INDICES.iter().all(|&i| i < 24));
        assert_eq!(validate_indices(&CUBE_INDICES, CUBE_VERTICES.len()), Ok(()));
    }

    #[test]
    fn test_cube_faces_share_an_edge() {
        for face in CUBE_INDICES.chunks(6) {
            let first = &face[..3];
            let second = &face[3..];
            let shared = first.iter().filter(|&i| second.contains(i)).count();
            assert_eq!(shared, 2, "face {face:?}");
        }
    }

    #[test]
    fn test_cube_winding_faces_outward() {
        for tri in CUBE_INDICES.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|k| CUBE_VERTICES[tri[k] as usize]);
            let normal = Vec3::from(a.normal);
            let pa = Vec3::from(a.position);
            let cross = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
            assert!(cross.dot(normal) > 0.0, "triangle {tri:?} winds inward");
            // Face normals point away from the centre.
            assert!(pa.dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_quad_triangles_cover_unit_quad_once() {
        let triangles = quad_triangles();
        assert_eq!(triangles.len(), 2);

        let total: f32 = triangles.iter().map(|t| signed_area(t[0], t[1], t[2])).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(triangles.iter().all(|t| signed_area(t[0], t[1], t[2]) > 0.0));

        // Sample points stay off the shared diagonal.
        for i in 0..10 {
            for j in 0..10 {
                let p = [-0.5 + (i as f32 + 0.5) / 10.0, -0.5 + (j as f32 + 0.3) / 10.0];
                let hits = triangles.iter().filter(|&&t| contains(t, p)).count();
                assert_eq!(hits, 1, "point {p:?}");
            }
        }
    }

    #[test]
    fn test_validate_indices_rejects_bad_lists() {
        assert_eq!(
            validate_indices(&[0, 1], 4),
            Err(GeometryError::IncompleteTriangle { len: 2 })
        );
        assert_eq!(
            validate_indices(&[0, 1, 4], 4),
            Err(GeometryError::IndexOutOfBounds {
                position: 2,
                index: 4,
                vertex_count: 4
            })
        );
        assert_eq!(validate_indices(&QUAD_INDICES, QUAD_VERTICES.len()), Ok(()));
    }
}
