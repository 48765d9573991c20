use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as Gl};

use crate::domain::config::{SceneConfig, SceneKind};
use crate::domain::error::SceneError;
use crate::simulation::{FramePlan, MeshKind, TextureSlot};
use crate::systems::geometry;

use super::buffers::GpuMesh;
use super::program::GlProgram;
use super::texture::{Texture, OBJECT_PLACEHOLDER, TABLE_PLACEHOLDER};

const TEXTURE_UNIT: u32 = 0;

/// GPU side of one window: context, program, meshes and textures.
///
/// Everything here is released when the renderer is dropped.
pub struct SceneRenderer {
    gl: Gl,
    canvas: HtmlCanvasElement,
    program: GlProgram,
    object_mesh: GpuMesh,
    table_mesh: Option<GpuMesh>,
    object_texture: Texture,
    table_texture: Option<Texture>,
}

impl SceneRenderer {
    pub fn new(
        canvas: &HtmlCanvasElement,
        kind: SceneKind,
        config: &SceneConfig,
    ) -> Result<SceneRenderer, SceneError> {
        let gl = create_context(canvas)?;
        fit_to_css_size(&gl, canvas);

        let program = GlProgram::new(&gl)?;
        program.use_program(&gl);
        if let (Some(loc), Some([r, g, b])) = (program.color_location, config.color) {
            gl.vertex_attrib3f(loc, r, g, b);
        }

        gl.enable(Gl::DEPTH_TEST);
        gl.depth_func(Gl::LESS);
        gl.clear_depth(1.0);
        gl.enable(Gl::BLEND);
        gl.blend_func(Gl::SRC_ALPHA, Gl::ONE_MINUS_SRC_ALPHA);
        gl.disable(Gl::CULL_FACE);

        let object_mesh = GpuMesh::upload(&gl, &geometry::cube())?;
        let mut object_texture = Texture::with_placeholder(&gl, OBJECT_PLACEHOLDER)?;
        object_texture.load(&config.textures.object)?;

        let (table_mesh, table_texture) = match kind {
            SceneKind::Dice => {
                let mesh = GpuMesh::upload(&gl, &geometry::table_default())?;
                let mut texture = Texture::with_placeholder(&gl, TABLE_PLACEHOLDER)?;
                texture.load(&config.textures.table)?;
                (Some(mesh), Some(texture))
            }
            SceneKind::Cube => (None, None),
        };

        log::debug!(
            "{kind} renderer ready ({}x{})",
            canvas.width(),
            canvas.height()
        );

        Ok(SceneRenderer {
            gl,
            canvas: canvas.clone(),
            program,
            object_mesh,
            table_mesh,
            object_texture,
            table_texture,
        })
    }

    /// Width over height of the drawing buffer
    pub fn aspect(&self) -> f32 {
        let h = self.canvas.height();
        if h == 0 {
            1.0
        } else {
            self.canvas.width() as f32 / h as f32
        }
    }

    pub fn draw(&self, plan: &FramePlan) {
        let gl = &self.gl;
        let [r, g, b, a] = plan.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        self.program.use_program(gl);

        for call in &plan.calls {
            let mesh = match call.mesh {
                MeshKind::Object => &self.object_mesh,
                MeshKind::Table => match &self.table_mesh {
                    Some(m) => m,
                    None => continue,
                },
            };
            let texture = match call.texture {
                TextureSlot::Object => &self.object_texture,
                TextureSlot::Table => self.table_texture.as_ref().unwrap_or(&self.object_texture),
            };

            mesh.bind(self.program.position_location, self.program.tex_coord_location);
            texture.bind(TEXTURE_UNIT);
            gl.uniform1i(Some(&self.program.texture_location), TEXTURE_UNIT as i32);
            gl.uniform_matrix4fv_with_f32_array(
                Some(&self.program.matrix_location),
                false,
                &call.matrix,
            );
            mesh.draw();
        }
    }

    /// Number of textures that have swapped their placeholder for an image
    pub fn textures_loaded(&self) -> u32 {
        let table = self.table_texture.as_ref().map_or(false, Texture::is_loaded);
        self.object_texture.is_loaded() as u32 + table as u32
    }
}

impl Drop for SceneRenderer {
    fn drop(&mut self) {
        self.program.delete(&self.gl);
    }
}

/// `webgl`, falling back to the prefixed name older browsers use
fn create_context(canvas: &HtmlCanvasElement) -> Result<Gl, SceneError> {
    for name in ["webgl", "experimental-webgl"] {
        if let Ok(Some(ctx)) = canvas.get_context(name) {
            if let Ok(gl) = ctx.dyn_into::<Gl>() {
                return Ok(gl);
            }
        }
    }
    Err(SceneError::ContextUnavailable(canvas.id()))
}

fn fit_to_css_size(gl: &Gl, canvas: &HtmlCanvasElement) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    gl.viewport(0, 0, w as i32, h as i32);
}
