/// Faces per box
pub const FACE_COUNT: usize = 6;

/// Corner signs per face
const BOX_FACES: [[[f32; 3]; 4]; FACE_COUNT] = [
    // front (+z)
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // back (-z)
    [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
    // top (+y)
    [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
    // bottom (-y)
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    // right (+x)
    [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
    // left (-x)
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
];

/// Vertex attributes plus triangle indices, ready for upload
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    /// xyz per vertex
    pub positions: Vec<f32>,
    /// uv per vertex
    pub tex_coords: Vec<f32>,
    pub indices: Vec<u16>,
}

impl MeshData {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Build a box with the given half extents; `uv_rect(face)` returns the
/// face's `(u0, v0, u1, v1)` texture rectangle.
fn build_box(half: [f32; 3], uv_rect: impl Fn(usize) -> [f32; 4]) -> MeshData {
    let mut positions = Vec::with_capacity(FACE_COUNT * 4 * 3);
    let mut tex_coords = Vec::with_capacity(FACE_COUNT * 4 * 2);
    let mut indices = Vec::with_capacity(FACE_COUNT * 6);

    for (f, corners) in BOX_FACES.iter().enumerate() {
        for c in corners {
            positions.extend_from_slice(&[c[0] * half[0], c[1] * half[1], c[2] * half[2]]);
        }

        let [u0, v0, u1, v1] = uv_rect(f);
        tex_coords.extend_from_slice(&[u0, v0, u1, v0, u1, v1, u0, v1]);

        let base = (f * 4) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData {
        positions,
        tex_coords,
        indices,
    }
}

/// Unit cube (±0.5), one 3×2 atlas cell per face
pub fn cube() -> MeshData {
    build_box([0.5, 0.5, 0.5], |face| {
        let col = (face % 3) as f32;
        let row = (face / 3) as f32;
        [col / 3.0, row * 0.5, (col + 1.0) / 3.0, (row + 1.0) * 0.5]
    })
}

/// Box of the given extents, full texture on every face
pub fn table(width: f32, height: f32, depth: f32) -> MeshData {
    build_box([width * 0.5, height * 0.5, depth * 0.5], |_| [0.0, 0.0, 1.0, 1.0])
}

/// 2×2×2 table box; the renderer flattens it with a non-uniform scale
pub fn table_default() -> MeshData {
    table(2.0, 2.0, 2.0)
}
