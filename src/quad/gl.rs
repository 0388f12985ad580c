//! Abstraction over the slice of WebGL the quad pipeline touches.
//!
//! `WebGlRenderingContext` implements this on wasm; tests drive the pipeline
//! with a recording fake. Methods mirror the GL call they stand for, with the
//! fixed arguments the pipeline never varies (target `ARRAY_BUFFER`, usage
//! `STATIC_DRAW`, f32 attributes, zero stride/offset) baked in.

use std::fmt;

/// Which stage of the program a shader object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

pub trait GlApi {
    type Shader;
    type Program;
    type Buffer;
    type Uniform;

    // Shader objects.
    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn compile_succeeded(&self, shader: &Self::Shader) -> bool;
    fn shader_log(&self, shader: &Self::Shader) -> String;
    fn delete_shader(&self, shader: &Self::Shader);

    // Program objects.
    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn link_succeeded(&self, program: &Self::Program) -> bool;
    fn program_log(&self, program: &Self::Program) -> String;
    fn use_program(&self, program: &Self::Program);

    // Location lookup. A missing attribute reports as a negative location.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Uniform>;

    // Vertex data. Upload targets ARRAY_BUFFER with STATIC_DRAW usage.
    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: &Self::Buffer);
    fn array_buffer_data(&self, vertices: &[f32]);

    // Frame state.
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear_depth(&self, depth: f32);
    fn enable_depth_test(&self);
    fn clear_frame(&self);

    // Draw-time bindings. Attributes are tightly packed f32, unnormalized.
    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32);
    fn enable_vertex_attrib_array(&self, location: u32);
    fn set_matrix_uniform(&self, location: &Self::Uniform, matrix: &[f32; 16]);
    fn draw_triangle_strip(&self, first: i32, count: i32);
}
