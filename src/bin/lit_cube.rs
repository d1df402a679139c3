//! Phong-lit textured cube over a floor plane, with a small white lamp
//! cube marking the light position.

use nalgebra_glm as glm;

use glshapes::geometry::{
    CUBE_FACES, LAMP_QUAD_VERTICES, LIT_QUAD_VERTICES, POS_COLOR_UV_NORMAL, POS_ONLY, QUAD_INDICES,
};
use glshapes::{
    CameraConfig, DemoError, DemoOptions, FrameContext, Mesh, Scene, ShaderProgram, Texture2d,
};

const VERTEX_SHADER: &str = r#"#version 330 core
layout(location = 0) in vec3 vPosition;
layout(location = 1) in vec3 aColor;
layout(location = 2) in vec2 texCoord;
layout(location = 3) in vec3 normal;
out vec3 oColor;
out vec2 oTexCoord;
out vec3 oNormal;
out vec3 fragPos;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main()
{
    gl_Position = projection * view * model * vec4(vPosition, 1.0);
    oColor = aColor;
    oTexCoord = texCoord;
    oNormal = mat3(transpose(inverse(model))) * normal;
    fragPos = vec3(model * vec4(vPosition, 1.0));
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
in vec3 oColor;
in vec2 oTexCoord;
in vec3 oNormal;
in vec3 fragPos;
out vec4 fragColor;
uniform sampler2D myTexture;
uniform vec3 objectColor;
uniform vec3 lightColor;
uniform vec3 lightPos;
uniform vec3 viewPos;
void main()
{
    // Ambient
    float ambientStrength = 0.2;
    vec3 ambient = ambientStrength * lightColor;
    // Diffuse
    vec3 norm = normalize(oNormal);
    vec3 lightDir = normalize(lightPos - fragPos);
    float diff = max(dot(norm, lightDir), 0.0);
    vec3 diffuse = diff * lightColor;
    // Specular
    float specularStrength = 1.5;
    vec3 viewDir = normalize(viewPos - fragPos);
    vec3 reflectDir = reflect(-lightDir, norm);
    float spec = pow(max(dot(viewDir, reflectDir), 0.0), 128.0);
    vec3 specular = specularStrength * spec * lightColor;
    vec3 result = (ambient + diffuse + specular) * objectColor;
    fragColor = texture(myTexture, oTexCoord) * vec4(result, 1.0);
}
"#;

const LAMP_VERTEX_SHADER: &str = r#"#version 330 core
layout(location = 0) in vec3 vPosition;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main()
{
    gl_Position = projection * view * model * vec4(vPosition, 1.0);
}
"#;

const LAMP_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 fragColor;
void main()
{
    fragColor = vec4(1.0);
}
"#;

const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 1.0];
const OBJECT_COLOR: [f32; 3] = [0.46, 0.36, 0.25];

struct LitCube {
    shader: ShaderProgram,
    lamp_shader: ShaderProgram,
    quad: Mesh,
    lamp_quad: Mesh,
    crate_texture: Texture2d,
    grid_texture: Texture2d,
}

impl Scene for LitCube {
    fn draw(&mut self, gl: &glow::Context, frame: &FrameContext) -> Result<(), DemoError> {
        let light_pos = glm::vec3(LIGHT_POSITION[0], LIGHT_POSITION[1], LIGHT_POSITION[2]);

        self.shader.activate(gl);
        self.shader.set_mat4(gl, "view", &frame.view);
        self.shader.set_mat4(gl, "projection", &frame.projection);
        self.shader
            .set_vec3(gl, "objectColor", &glm::vec3(OBJECT_COLOR[0], OBJECT_COLOR[1], OBJECT_COLOR[2]));
        self.shader.set_vec3(gl, "lightColor", &glm::vec3(1.0, 1.0, 1.0));
        self.shader.set_vec3(gl, "lightPos", &light_pos);
        self.shader.set_vec3(gl, "viewPos", &frame.camera_position);

        // Cube
        self.crate_texture.bind(gl);
        for face in &CUBE_FACES {
            self.shader.set_mat4(gl, "model", &face.model_matrix());
            self.quad.draw(gl);
        }

        // Floor
        self.grid_texture.bind(gl);
        let mut model = glm::Mat4::identity();
        model = glm::translate(&model, &glm::vec3(0.0, -0.5, 0.0));
        model = glm::rotate(&model, 90.0_f32.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
        model = glm::scale(&model, &glm::vec3(5.0, 5.0, 5.0));
        self.shader.set_mat4(gl, "model", &model);
        self.quad.draw(gl);

        Texture2d::unbind(gl);
        ShaderProgram::deactivate(gl);

        // Lamp: the same six faces shrunk to an eighth around the light.
        self.lamp_shader.activate(gl);
        self.lamp_shader.set_mat4(gl, "view", &frame.view);
        self.lamp_shader.set_mat4(gl, "projection", &frame.projection);
        for face in &CUBE_FACES {
            let offset = glm::vec3(
                face.position[0] / 8.0 + light_pos.x,
                face.position[1] / 8.0 + light_pos.y,
                face.position[2] / 8.0 + light_pos.z,
            );
            let mut model = glm::Mat4::identity();
            model = glm::translate(&model, &offset);
            model = glm::rotate(&model, face.yaw_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
            model = glm::rotate(&model, face.tilt_deg.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
            model = glm::scale(&model, &glm::vec3(0.125, 0.125, 0.125));
            self.lamp_shader.set_mat4(gl, "model", &model);
            self.lamp_quad.draw(gl);
        }
        ShaderProgram::deactivate(gl);

        Ok(())
    }

    fn destroy(&mut self, gl: &glow::Context) {
        self.quad.destroy(gl);
        self.lamp_quad.destroy(gl);
        self.crate_texture.destroy(gl);
        self.grid_texture.destroy(gl);
        self.shader.destroy(gl);
        self.lamp_shader.destroy(gl);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = DemoOptions {
        title: "Lit Cube",
        camera: CameraConfig {
            fov_bounds: (1.0, 55.0),
            pitch_limit: Some(std::f32::consts::FRAC_PI_2 - 0.1),
            ..CameraConfig::default()
        },
        ..DemoOptions::default()
    };

    glshapes::run(options, |gl| {
        Ok(Box::new(LitCube {
            shader: ShaderProgram::new(gl, VERTEX_SHADER, FRAGMENT_SHADER)?,
            lamp_shader: ShaderProgram::new(gl, LAMP_VERTEX_SHADER, LAMP_FRAGMENT_SHADER)?,
            quad: Mesh::new(gl, &LIT_QUAD_VERTICES, &QUAD_INDICES, &POS_COLOR_UV_NORMAL)?,
            lamp_quad: Mesh::new(gl, &LAMP_QUAD_VERTICES, &QUAD_INDICES, &POS_ONLY)?,
            crate_texture: Texture2d::from_file_or_checkerboard(gl, "crate.png")?,
            grid_texture: Texture2d::from_file_or_checkerboard(gl, "grid.png")?,
        }))
    })?;

    Ok(())
}
