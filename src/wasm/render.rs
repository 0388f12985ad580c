//! WebGL glue: implements [`GlApi`] for the browser context and runs the
//! one-shot quad pipeline against it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGlRenderingContext as GL};
use web_sys::{WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::quad::{self, GlApi, ShaderStage};

/// Acquires a WebGL context from the canvas and draws the quad once.
///
/// Context absence, shader compile failure, and link failure are each
/// reported through a blocking alert; the renderer then simply does not run,
/// leaving the rest of the page intact.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    // get_context can signal absence either way: a null context or a thrown
    // exception. Both get the same alert.
    let gl: GL = match canvas.get_context("webgl") {
        Ok(Some(context)) => context.dyn_into()?,
        Ok(None) | Err(_) => {
            window.alert_with_message(
                "Unable to initialize WebGL. Your browser or machine may not support it.",
            )?;
            return Ok(());
        }
    };

    if let Err(err) = quad::render(&gl, canvas.width(), canvas.height()) {
        web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
        window.alert_with_message(&err.to_string())?;
    }
    Ok(())
}

impl GlApi for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Uniform = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        GL::create_shader(self, kind)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        GL::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        GL::compile_shader(self, shader);
    }

    fn compile_succeeded(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_log(&self, shader: &WebGlShader) -> String {
        self.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        GL::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        GL::link_program(self, program);
    }

    fn link_succeeded(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_log(&self, program: &WebGlProgram) -> String {
        self.get_program_info_log(program).unwrap_or_default()
    }

    fn use_program(&self, program: &WebGlProgram) {
        GL::use_program(self, Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.get_attrib_location(program, name)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_array_buffer(&self, buffer: &WebGlBuffer) {
        self.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    }

    fn array_buffer_data(&self, vertices: &[f32]) {
        // `Float32Array::view` borrows wasm memory directly; the view must
        // not outlive `vertices` and no allocation may happen while it is
        // alive, hence the tight unsafe block.
        unsafe {
            let view = js_sys::Float32Array::view(vertices);
            self.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
        }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        GL::clear_color(self, r, g, b, a);
    }

    fn clear_depth(&self, depth: f32) {
        GL::clear_depth(self, depth);
    }

    fn enable_depth_test(&self) {
        self.enable(GL::DEPTH_TEST);
    }

    fn clear_frame(&self) {
        self.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32) {
        self.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        GL::enable_vertex_attrib_array(self, location);
    }

    fn set_matrix_uniform(&self, location: &WebGlUniformLocation, matrix: &[f32; 16]) {
        self.uniform_matrix4fv_with_f32_array(Some(location), false, matrix);
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.draw_arrays(GL::TRIANGLE_STRIP, first, count);
    }
}
