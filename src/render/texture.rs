use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, WebGlRenderingContext as Gl, WebGlTexture};

use crate::domain::error::SceneError;

/// Shown on the cube/dice until its image arrives
pub const OBJECT_PLACEHOLDER: [u8; 4] = [255, 100, 100, 255];
/// Shown on the table until its image arrives
pub const TABLE_PLACEHOLDER: [u8; 4] = [139, 69, 19, 255];

const DETAIL_LEVEL: i32 = 0;
const BORDER_WIDTH: i32 = 0;

/// 2D texture that starts as a single-pixel placeholder and is replaced
/// in place once its image loads. A failed load keeps the placeholder.
pub struct Texture {
    gl: Gl,
    texture: WebGlTexture,
    image: Option<HtmlImageElement>,
    loaded: Rc<Cell<bool>>,
    onload: Option<Closure<dyn FnMut()>>,
    onerror: Option<Closure<dyn FnMut()>>,
}

impl Texture {
    /// Create the texture holding one `rgba` pixel, usable immediately
    pub fn with_placeholder(gl: &Gl, rgba: [u8; 4]) -> Result<Texture, SceneError> {
        let texture = gl
            .create_texture()
            .ok_or(SceneError::ResourceCreation("texture"))?;
        gl.bind_texture(Gl::TEXTURE_2D, Some(&texture));

        let uploaded = gl
            .tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
                Gl::TEXTURE_2D,
                DETAIL_LEVEL,
                Gl::RGBA as i32,
                1,
                1,
                BORDER_WIDTH,
                Gl::RGBA,
                Gl::UNSIGNED_BYTE,
                Some(&rgba),
            );
        if uploaded.is_err() {
            gl.delete_texture(Some(&texture));
            return Err(SceneError::ResourceCreation("placeholder pixel"));
        }

        Ok(Texture {
            gl: gl.clone(),
            texture,
            image: None,
            loaded: Rc::new(Cell::new(false)),
            onload: None,
            onerror: None,
        })
    }

    /// Start fetching `url`. Single attempt, no retry.
    pub fn load(&mut self, url: &str) -> Result<(), SceneError> {
        let image = HtmlImageElement::new()
            .map_err(|_| SceneError::Dom("unable to create image element".to_string()))?;

        let onload = {
            let gl = self.gl.clone();
            let texture = self.texture.clone();
            let image = image.clone();
            let loaded = Rc::clone(&self.loaded);
            let url = url.to_string();
            Closure::wrap(Box::new(move || {
                if let Err(e) = upload_image(&gl, &texture, &image) {
                    log::warn!("texture {url} could not be uploaded: {e}");
                    return;
                }
                loaded.set(true);
                log::debug!("texture {url} loaded");
            }) as Box<dyn FnMut()>)
        };

        let onerror = {
            let url = url.to_string();
            Closure::wrap(Box::new(move || {
                log::warn!("texture {url} failed to load, keeping placeholder");
            }) as Box<dyn FnMut()>)
        };

        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        image.set_src(url);

        self.detach_image();
        self.image = Some(image);
        self.onload = Some(onload);
        self.onerror = Some(onerror);
        Ok(())
    }

    pub fn bind(&self, unit: u32) {
        self.gl.active_texture(Gl::TEXTURE0 + unit);
        self.gl.bind_texture(Gl::TEXTURE_2D, Some(&self.texture));
    }

    /// Image has replaced the placeholder
    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    fn detach_image(&mut self) {
        if let Some(image) = self.image.take() {
            image.set_onload(None);
            image.set_onerror(None);
        }
        self.onload = None;
        self.onerror = None;
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.detach_image();
        self.gl.delete_texture(Some(&self.texture));
    }
}

fn upload_image(gl: &Gl, texture: &WebGlTexture, image: &HtmlImageElement) -> Result<(), SceneError> {
    gl.bind_texture(Gl::TEXTURE_2D, Some(texture));
    gl.tex_image_2d_with_u32_and_u32_and_image(
        Gl::TEXTURE_2D,
        DETAIL_LEVEL,
        Gl::RGBA as i32,
        Gl::RGBA,
        Gl::UNSIGNED_BYTE,
        image,
    )
    .map_err(|_| SceneError::ResourceCreation("texture image"))?;

    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_S, Gl::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_T, Gl::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MIN_FILTER, Gl::LINEAR as i32);
    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MAG_FILTER, Gl::LINEAR as i32);
    Ok(())
}
