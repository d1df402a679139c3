//! Four wireframe colored planes around the origin; the minimal scene for
//! trying out the orbit/pan camera.

use glshapes::geometry::{COLORED_QUAD_VERTICES, PLANE_RING, POS_COLOR, QUAD_INDICES};
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

struct PlaneRing {
    shader: ShaderProgram,
    quad: Mesh,
}

impl Scene for PlaneRing {
    fn draw(&mut self, gl: &glow::Context, frame: &FrameContext) -> Result<(), DemoError> {
        self.shader.activate(gl);
        self.shader.set_mat4(gl, "view", &frame.view);
        self.shader.set_mat4(gl, "projection", &frame.projection);

        for plane in &PLANE_RING {
            self.shader.set_mat4(gl, "model", &plane.model_matrix());
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
        title: "Camera Controls",
        wireframe: true,
        ..DemoOptions::default()
    };

    glshapes::run(options, |gl| {
        Ok(Box::new(PlaneRing {
            shader: ShaderProgram::new(gl, VERTEX_SHADER, FRAGMENT_SHADER)?,
            quad: Mesh::new(gl, &COLORED_QUAD_VERTICES, &QUAD_INDICES, &POS_COLOR)?,
        }))
    })?;

    Ok(())
}
