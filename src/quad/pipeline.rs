//! One-shot initialization and draw for the static quad.
//!
//! The whole sequence runs exactly once per page load: compile and link the
//! fixed shader pair, upload four vertices, build the two transform matrices,
//! clear the frame, and issue a single triangle-strip draw. There is no
//! animation loop and nothing here is ever re-entered.

use super::gl::{GlApi, ShaderStage};
use super::matrix::Mat4;

pub const VERTEX_SHADER_SRC: &str = r#"
attribute vec4 aVertexPosition;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
}
"#;

// The 350.0 divisor is kept verbatim from the shipped shader; it bakes in an
// assumed canvas size rather than reading the real one.
pub const FRAGMENT_SHADER_SRC: &str = r#"
void main() {
    gl_FragColor = vec4(((gl_FragCoord.x + gl_FragCoord.y) * 0.5) / 350.0, 1.0, 1.0, 1.0);
}
"#;

/// Unit square as a triangle strip: top right, top left, bottom right,
/// bottom left.
pub const QUAD_POSITIONS: [f32; 8] = [
    1.0, 1.0, //
    -1.0, 1.0, //
    1.0, -1.0, //
    -1.0, -1.0,
];

/// Vertical field of view, 45 degrees.
pub const FIELD_OF_VIEW: f32 = std::f32::consts::FRAC_PI_4;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// The quad sits three units away from the viewer.
pub const QUAD_DEPTH: f32 = -3.0;

const POSITION_ATTRIB: &str = "aVertexPosition";
const PROJECTION_UNIFORM: &str = "uProjectionMatrix";
const MODEL_VIEW_UNIFORM: &str = "uModelViewMatrix";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unable to allocate a {0} object")]
    Allocation(&'static str),
    #[error("an error occurred compiling the {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("unable to initialize the shader program: {log}")]
    Link { log: String },
    #[error("attribute {0} not found in the linked program")]
    MissingAttribute(&'static str),
    #[error("uniform {0} not found in the linked program")]
    MissingUniform(&'static str),
}

/// Compiles one stage and checks its status; a failed shader is deleted
/// before the driver log is returned.
fn compile_stage<G: GlApi>(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader, RenderError> {
    let shader = gl
        .create_shader(stage)
        .ok_or(RenderError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl.compile_succeeded(&shader) {
        Ok(shader)
    } else {
        let log = gl.shader_log(&shader);
        gl.delete_shader(&shader);
        Err(RenderError::Compile { stage, log })
    }
}

fn link_quad_program<G: GlApi>(gl: &G) -> Result<G::Program, RenderError> {
    let vertex = compile_stage(gl, ShaderStage::Vertex, VERTEX_SHADER_SRC)?;
    let fragment = compile_stage(gl, ShaderStage::Fragment, FRAGMENT_SHADER_SRC)?;

    let program = gl
        .create_program()
        .ok_or(RenderError::Allocation("program"))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);
    if gl.link_succeeded(&program) {
        Ok(program)
    } else {
        Err(RenderError::Link {
            log: gl.program_log(&program),
        })
    }
}

/// Runs the full initialization sequence and draws the quad once.
///
/// `width` and `height` are the canvas dimensions; they only feed the
/// projection's aspect ratio. On any failure the sequence stops where it is
/// and no draw call is issued.
pub fn render<G: GlApi>(gl: &G, width: u32, height: u32) -> Result<(), RenderError> {
    let program = link_quad_program(gl)?;

    let position = gl.attrib_location(&program, POSITION_ATTRIB);
    if position < 0 {
        return Err(RenderError::MissingAttribute(POSITION_ATTRIB));
    }
    let projection = gl
        .uniform_location(&program, PROJECTION_UNIFORM)
        .ok_or(RenderError::MissingUniform(PROJECTION_UNIFORM))?;
    let model_view = gl
        .uniform_location(&program, MODEL_VIEW_UNIFORM)
        .ok_or(RenderError::MissingUniform(MODEL_VIEW_UNIFORM))?;

    let buffer = gl
        .create_buffer()
        .ok_or(RenderError::Allocation("buffer"))?;
    gl.bind_array_buffer(&buffer);
    gl.array_buffer_data(&QUAD_POSITIONS);

    let aspect = width as f32 / height as f32;
    let projection_matrix = Mat4::perspective(FIELD_OF_VIEW, aspect, Z_NEAR, Z_FAR);
    let model_view_matrix = Mat4::translation(0.0, 0.0, QUAD_DEPTH);

    gl.clear_color(0.0, 0.0, 0.0, 1.0);
    gl.clear_depth(1.0);
    gl.enable_depth_test();
    gl.clear_frame();

    gl.vertex_attrib_pointer_f32(position as u32, 2);
    gl.enable_vertex_attrib_array(position as u32);

    gl.use_program(&program);
    gl.set_matrix_uniform(&projection, projection_matrix.as_array());
    gl.set_matrix_uniform(&model_view, model_view_matrix.as_array());

    gl.draw_triangle_strip(0, 4);
    Ok(())
}
