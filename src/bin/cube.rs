//! Colored cube assembled from six quad instances. The view is fixed (a
//! step back plus a diagonal tilt) rather than camera driven, matching the
//! simplest of the demos.

use nalgebra_glm as glm;

use glshapes::geometry::{COLORED_QUAD_VERTICES, CUBE_FACES, POS_COLOR, QUAD_INDICES};
use glshapes::{DemoError, DemoOptions, FrameContext, Mesh, Scene, ShaderProgram};

const VERTEX_SHADER: &str = r#"#version 330 core
layout(location = 0) in vec3 vPosition;
layout(location = 1) in vec3 aColor;
out vec3 oColor;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main()
{
    gl_Position = projection * view * model * vec4(vPosition, 1.0);
    oColor = aColor;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
in vec3 oColor;
out vec4 fragColor;
void main()
{
    fragColor = vec4(oColor, 1.0);
}
"#;

struct ColoredCube {
    shader: ShaderProgram,
    quad: Mesh,
}

impl Scene for ColoredCube {
    fn draw(&mut self, gl: &glow::Context, frame: &FrameContext) -> Result<(), DemoError> {
        // Fixed view: back off three units, then tilt 45 degrees around the
        // (1,1,0) diagonal so three faces are visible.
        let mut view = glm::Mat4::identity();
        view = glm::translate(&view, &glm::vec3(0.0, 0.0, -3.0));
        view = glm::rotate(&view, 45.0_f32.to_radians(), &glm::vec3(1.0, 1.0, 0.0));

        self.shader.activate(gl);
        self.shader.set_mat4(gl, "view", &view);
        self.shader.set_mat4(gl, "projection", &frame.projection);

        for face in &CUBE_FACES {
            self.shader.set_mat4(gl, "model", &face.model_matrix());
            self.quad.draw(gl);
        }

        ShaderProgram::deactivate(gl);
        Ok(())
    }

    fn destroy(&mut self, gl: &glow::Context) {
        self.quad.destroy(gl);
        self.shader.destroy(gl);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = DemoOptions {
        title: "Cube",
        ..DemoOptions::default()
    };

    glshapes::run(options, |gl| {
        Ok(Box::new(ColoredCube {
            shader: ShaderProgram::new(gl, VERTEX_SHADER, FRAGMENT_SHADER)?,
            quad: Mesh::new(gl, &COLORED_QUAD_VERTICES, &QUAD_INDICES, &POS_COLOR)?,
        }))
    })?;

    Ok(())
}
