/// Quadric slots handed to the renderer
pub const QUADRIC_SLOTS: usize = 6;
/// Light slots handed to the renderer
pub const LIGHT_SLOTS: usize = 8;

/// One quadric as the trace shader sees it
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadricUniform {
    pub surface: [[f32; 4]; 4], // column-major
    pub clipper: [[f32; 4]; 4],
    pub shininess: f32,
    pub _pad: [f32; 3],
}

/// Light position (w = 0 directional) and RGB power density
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 4],
    pub power_density: [f32; 3],
    pub _pad: f32,
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Maps NDC `(x, y, z, 1)` to a homogeneous point along the view ray
    pub ray_dir_matrix: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32, // seconds since the first frame
}

/// Everything the renderer needs for one frame, laid out for a single
/// uniform buffer binding
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub camera: CameraUniform,
    pub quadrics: [QuadricUniform; QUADRIC_SLOTS],
    pub lights: [LightUniform; LIGHT_SLOTS],
}

impl SceneUniforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
