use crate::types::SceneUniforms;

/// Backend that turns packed scene state into pixels
pub trait SceneRenderer {
    /// Viewport changed; called before the scene sees the new size
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame from the packed uniforms
    fn draw(&mut self, uniforms: &SceneUniforms) -> anyhow::Result<()>;
}
