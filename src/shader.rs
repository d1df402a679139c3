use glow::HasContext;
use nalgebra_glm as glm;

use crate::error::DemoError;

/// Compiled and linked GLSL program built from inline source strings.
pub struct ShaderProgram {
    program: glow::NativeProgram,
}

impl ShaderProgram {
    pub fn new(
        gl: &glow::Context,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, DemoError> {
        unsafe {
            let vertex = compile_shader(gl, glow::VERTEX_SHADER, vertex_src)
                .map_err(|e| DemoError::new("shader-program").push_demo(e))?;
            let fragment = match compile_shader(gl, glow::FRAGMENT_SHADER, fragment_src) {
                Ok(shader) => shader,
                Err(e) => {
                    gl.delete_shader(vertex);
                    return Err(DemoError::new("shader-program").push_demo(e));
                }
            };

            let program = gl.create_program().map_err(DemoError::from)?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(DemoError::new("shader-link").with_arg("log", log));
            }

            Ok(Self { program })
        }
    }

    pub fn activate(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    pub fn deactivate(gl: &glow::Context) {
        unsafe { gl.use_program(None) };
    }

    pub fn set_mat4(&self, gl: &glow::Context, name: &str, value: &glm::Mat4) {
        unsafe {
            let location = gl.get_uniform_location(self.program, name);
            gl.uniform_matrix_4_f32_slice(location.as_ref(), false, value.as_slice());
        }
    }

    pub fn set_vec3(&self, gl: &glow::Context, name: &str, value: &glm::Vec3) {
        unsafe {
            let location = gl.get_uniform_location(self.program, name);
            gl.uniform_3_f32(location.as_ref(), value.x, value.y, value.z);
        }
    }

    pub fn set_f32(&self, gl: &glow::Context, name: &str, value: f32) {
        unsafe {
            let location = gl.get_uniform_location(self.program, name);
            gl.uniform_1_f32(location.as_ref(), value);
        }
    }

    pub fn set_i32(&self, gl: &glow::Context, name: &str, value: i32) {
        unsafe {
            let location = gl.get_uniform_location(self.program, name);
            gl.uniform_1_i32(location.as_ref(), value);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    stage: u32,
    source: &str,
) -> Result<glow::NativeShader, DemoError> {
    unsafe {
        let shader = gl.create_shader(stage).map_err(DemoError::from)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            let stage = if stage == glow::VERTEX_SHADER {
                "vertex"
            } else {
                "fragment"
            };
            return Err(DemoError::new("shader-compile")
                .with_arg("stage", stage)
                .with_arg("log", log));
        }

        Ok(shader)
    }
}
