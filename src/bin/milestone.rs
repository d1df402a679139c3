//! Wireframe "lapis" shape (a colored kite profile swept around the Y axis
//! in 60 degree steps) over a brown ground plane. The P key switches
//! between perspective and orthographic projection.

use nalgebra_glm as glm;

use glshapes::geometry::{
    FaceTransform, GROUND_PLANE_INDICES, GROUND_PLANE_VERTICES, LAPIS_INDICES, LAPIS_SWEEP_DEG,
    LAPIS_VERTICES, POS_COLOR,
};
use glshapes::{
    CameraConfig, DemoError, DemoOptions, FrameContext, Mesh, Scene, ShaderProgram,
};

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

struct Milestone {
    shader: ShaderProgram,
    lapis: Mesh,
    ground: Mesh,
}

impl Scene for Milestone {
    fn draw(&mut self, gl: &glow::Context, frame: &FrameContext) -> Result<(), DemoError> {
        self.shader.activate(gl);
        self.shader.set_mat4(gl, "view", &frame.view);
        self.shader.set_mat4(gl, "projection", &frame.projection);

        for yaw_deg in LAPIS_SWEEP_DEG {
            let sweep = FaceTransform::new([0.0, 0.0, 0.0], yaw_deg, 0.0);
            self.shader.set_mat4(gl, "model", &sweep.model_matrix());
            self.lapis.draw(gl);
        }

        self.shader.set_mat4(gl, "model", &glm::Mat4::identity());
        self.ground.draw(gl);

        ShaderProgram::deactivate(gl);
        Ok(())
    }

    fn destroy(&mut self, gl: &glow::Context) {
        self.lapis.destroy(gl);
        self.ground.destroy(gl);
        self.shader.destroy(gl);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = DemoOptions {
        title: "Milestone",
        wireframe: true,
        projection_toggle: true,
        camera: CameraConfig {
            position: glm::vec3(0.0, 0.0, 6.0),
            radius: 6.0,
            ..CameraConfig::default()
        },
        ..DemoOptions::default()
    };

    glshapes::run(options, |gl| {
        Ok(Box::new(Milestone {
            shader: ShaderProgram::new(gl, VERTEX_SHADER, FRAGMENT_SHADER)?,
            lapis: Mesh::new(gl, &LAPIS_VERTICES, &LAPIS_INDICES, &POS_COLOR)?,
            ground: Mesh::new(gl, &GROUND_PLANE_VERTICES, &GROUND_PLANE_INDICES, &POS_COLOR)?,
        }))
    })?;

    Ok(())
}
