use thiserror::Error;

/// Everything that can go wrong while building or running one scene.
///
/// Failures stay inside the scene that produced them; sibling windows keep
/// rendering.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("WebGL not supported for surface '{0}'")]
    ContextUnavailable(String),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("shader program failed to link: {0}")]
    ShaderLink(String),

    #[error("failed to create GPU resource: {0}")]
    ResourceCreation(&'static str),

    #[error("invalid scene config: {0}")]
    InvalidConfig(String),

    #[error("unknown scene kind '{0}'")]
    UnknownKind(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        SceneError::InvalidConfig(e.to_string())
    }
}

impl From<SceneError> for wasm_bindgen::JsValue {
    fn from(e: SceneError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
