use web_sys::{WebGlProgram, WebGlRenderingContext as Gl, WebGlShader, WebGlUniformLocation};

use crate::domain::error::SceneError;

const VERTEX_SHADER: &str = r"
attribute vec3 a_position;
attribute vec2 a_texCoord;
attribute vec3 a_color;
uniform mat4 u_matrix;
varying vec2 v_texCoord;
varying vec3 v_color;

void main() {
    gl_Position = u_matrix * vec4(a_position, 1.0);
    v_texCoord = a_texCoord;
    v_color = a_color;
}
";

const FRAGMENT_SHADER: &str = r"
precision mediump float;
varying vec2 v_texCoord;
varying vec3 v_color;
uniform sampler2D u_texture;

void main() {
    vec4 texColor = texture2D(u_texture, v_texCoord);
    if (texColor.a == 0.0) {
        gl_FragColor = vec4(0.4, 0.2, 0.05, 1.0);
    } else {
        gl_FragColor = texColor;
    }
}
";

/// Linked textured-mesh program and its attribute/uniform slots
pub struct GlProgram {
    program: WebGlProgram,
    pub position_location: u32,
    pub tex_coord_location: u32,
    /// `None` when the driver strips the unused color attribute
    pub color_location: Option<u32>,
    pub matrix_location: WebGlUniformLocation,
    pub texture_location: WebGlUniformLocation,
}

impl GlProgram {
    pub fn new(gl: &Gl) -> Result<GlProgram, SceneError> {
        let vertex = compile_shader(gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = match compile_shader(gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER) {
            Ok(s) => s,
            Err(e) => {
                gl.delete_shader(Some(&vertex));
                return Err(e);
            }
        };

        let program = gl
            .create_program()
            .ok_or(SceneError::ResourceCreation("program"))?;
        gl.attach_shader(&program, &vertex);
        gl.attach_shader(&program, &fragment);
        gl.link_program(&program);

        // Shaders are owned by the program once linked
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));

        let linked = gl
            .get_program_parameter(&program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            return Err(SceneError::ShaderLink(log));
        }

        let position_location = attrib_location(gl, &program, "a_position")
            .ok_or(SceneError::ResourceCreation("a_position attribute"))?;
        let tex_coord_location = attrib_location(gl, &program, "a_texCoord")
            .ok_or(SceneError::ResourceCreation("a_texCoord attribute"))?;
        let color_location = attrib_location(gl, &program, "a_color");
        let matrix_location = gl
            .get_uniform_location(&program, "u_matrix")
            .ok_or(SceneError::ResourceCreation("u_matrix uniform"))?;
        let texture_location = gl
            .get_uniform_location(&program, "u_texture")
            .ok_or(SceneError::ResourceCreation("u_texture uniform"))?;

        Ok(GlProgram {
            program,
            position_location,
            tex_coord_location,
            color_location,
            matrix_location,
            texture_location,
        })
    }

    pub fn use_program(&self, gl: &Gl) {
        gl.use_program(Some(&self.program));
    }

    pub fn delete(&self, gl: &Gl) {
        gl.delete_program(Some(&self.program));
    }
}

fn attrib_location(gl: &Gl, program: &WebGlProgram, name: &str) -> Option<u32> {
    let loc = gl.get_attrib_location(program, name);
    if loc < 0 {
        None
    } else {
        Some(loc as u32)
    }
}

fn compile_shader(gl: &Gl, stage: u32, source: &str) -> Result<WebGlShader, SceneError> {
    let stage_name = if stage == Gl::VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };
    let shader = gl
        .create_shader(stage)
        .ok_or(SceneError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SceneError::ShaderCompile {
            stage: stage_name,
            log,
        })
    }
}
