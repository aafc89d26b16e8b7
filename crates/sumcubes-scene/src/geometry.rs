/// Simple procedural mesh generation for unit cubes.

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle list for one cube
#[derive(Clone, Debug)]
pub struct CubeMesh {
    pub vertices: Vec<CubeVertex>,
    pub indices: Vec<u32>,
}

// (normal, tangent u, tangent v) per face; u x v == normal keeps CCW winding
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Generate an axis-aligned cube of edge `size` centered on the origin.
///
/// Each face gets its own four vertices so normals and texture
/// coordinates stay flat; indices are a CCW triangle list.
pub fn generate_cube(size: f32) -> CubeMesh {
    let half = size / 2.0;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u32;

        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = [
                (normal[0] + u[0] * su + v[0] * sv) * half,
                (normal[1] + u[1] * su + v[1] * sv) * half,
                (normal[2] + u[2] * su + v[2] * sv) * half,
            ];
            vertices.push(CubeVertex {
                position,
                normal,
                uv: [(su + 1.0) / 2.0, (1.0 - sv) / 2.0],
            });
        }

        // Two triangles per face (CCW)
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    CubeMesh { vertices, indices }
}
