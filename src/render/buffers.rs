use js_sys::{Float32Array, Uint16Array};
use web_sys::{WebGlBuffer, WebGlRenderingContext as Gl};

use crate::domain::error::SceneError;
use crate::systems::geometry::MeshData;

/// Static GPU copy of a `MeshData`.
///
/// Buffers live as long as the mesh; dropping it deletes them.
pub struct GpuMesh {
    gl: Gl,
    position_buffer: WebGlBuffer,
    tex_coord_buffer: WebGlBuffer,
    index_buffer: WebGlBuffer,
    index_count: i32,
}

impl GpuMesh {
    pub fn upload(gl: &Gl, mesh: &MeshData) -> Result<GpuMesh, SceneError> {
        let position_buffer = create_array_buffer(gl, &mesh.positions)?;
        let tex_coord_buffer = match create_array_buffer(gl, &mesh.tex_coords) {
            Ok(b) => b,
            Err(e) => {
                gl.delete_buffer(Some(&position_buffer));
                return Err(e);
            }
        };
        let index_buffer = match create_index_buffer(gl, &mesh.indices) {
            Ok(b) => b,
            Err(e) => {
                gl.delete_buffer(Some(&position_buffer));
                gl.delete_buffer(Some(&tex_coord_buffer));
                return Err(e);
            }
        };

        Ok(GpuMesh {
            gl: gl.clone(),
            position_buffer,
            tex_coord_buffer,
            index_buffer,
            index_count: mesh.index_count() as i32,
        })
    }

    /// Point the position/texcoord attributes at this mesh and bind its indices
    pub fn bind(&self, position_location: u32, tex_coord_location: u32) {
        let gl = &self.gl;

        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&self.position_buffer));
        gl.enable_vertex_attrib_array(position_location);
        gl.vertex_attrib_pointer_with_i32(position_location, 3, Gl::FLOAT, false, 0, 0);

        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&self.tex_coord_buffer));
        gl.enable_vertex_attrib_array(tex_coord_location);
        gl.vertex_attrib_pointer_with_i32(tex_coord_location, 2, Gl::FLOAT, false, 0, 0);

        gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&self.index_buffer));
    }

    pub fn draw(&self) {
        self.gl
            .draw_elements_with_i32(Gl::TRIANGLES, self.index_count, Gl::UNSIGNED_SHORT, 0);
    }

    #[inline]
    pub fn index_count(&self) -> i32 {
        self.index_count
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.position_buffer));
        self.gl.delete_buffer(Some(&self.tex_coord_buffer));
        self.gl.delete_buffer(Some(&self.index_buffer));
    }
}

fn create_array_buffer(gl: &Gl, data: &[f32]) -> Result<WebGlBuffer, SceneError> {
    let buffer = gl
        .create_buffer()
        .ok_or(SceneError::ResourceCreation("vertex buffer"))?;
    let array = Float32Array::new_with_length(data.len() as u32);
    array.copy_from(data);

    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &array, Gl::STATIC_DRAW);
    Ok(buffer)
}

fn create_index_buffer(gl: &Gl, data: &[u16]) -> Result<WebGlBuffer, SceneError> {
    let buffer = gl
        .create_buffer()
        .ok_or(SceneError::ResourceCreation("index buffer"))?;
    let array = Uint16Array::new_with_length(data.len() as u32);
    array.copy_from(data);

    gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(Gl::ELEMENT_ARRAY_BUFFER, &array, Gl::STATIC_DRAW);
    Ok(buffer)
}
