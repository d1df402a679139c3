//! Textured pyramid shell of four leaning triangles, lit by a green and a
//! red point light, each marked by a small lamp pyramid.

use nalgebra_glm as glm;

use glshapes::geometry::{
    LAMP_TRIANGLE_VERTICES, POS_COLOR_UV_NORMAL, POS_ONLY, PYRAMID_FACE_VERTICES, PYRAMID_FACES,
    TRIANGLE_INDICES,
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
uniform vec3 lightColor1;
uniform vec3 lightPos1;
uniform vec3 viewPos;
void main()
{
    // Ambient
    float ambientStrength = 1.0;
    float ambientStrength1 = 0.4;
    vec3 ambient = ambientStrength * lightColor;
    vec3 ambient1 = ambientStrength1 * lightColor1;
    // Diffuse
    vec3 norm = normalize(oNormal);
    vec3 lightDir = normalize(lightPos - fragPos);
    vec3 lightDir1 = normalize(lightPos1 - fragPos);
    float diff = max(dot(norm, lightDir), 0.0);
    float diff1 = max(dot(norm, lightDir1), 0.0);
    vec3 diffuse = diff * lightColor;
    vec3 diffuse1 = diff1 * lightColor1;
    // Specular
    float specularStrength = 1.5;
    vec3 viewDir = normalize(viewPos - fragPos);
    vec3 reflectDir = reflect(-lightDir, norm);
    vec3 reflectDir1 = reflect(-lightDir1, norm);
    float spec = pow(max(dot(viewDir, reflectDir), 0.0), 128.0);
    float spec1 = pow(max(dot(viewDir, reflectDir1), 0.0), 128.0);
    vec3 specular = specularStrength * spec * lightColor;
    vec3 specular1 = specularStrength * spec1 * lightColor1;
    vec3 result = (ambient + ambient1 + diffuse + diffuse1 + specular + specular1) * objectColor;
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

const LIGHT_POSITIONS: [[f32; 3]; 2] = [[1.0, 1.0, 1.0], [-1.0, 0.0, -1.0]];

struct PyramidTwoLights {
    shader: ShaderProgram,
    lamp_shader: ShaderProgram,
    face: Mesh,
    lamp_face: Mesh,
    bricks: Texture2d,
}

impl PyramidTwoLights {
    fn draw_lamp(&self, gl: &glow::Context, light: &glm::Vec3) {
        for face in &PYRAMID_FACES {
            let offset = glm::vec3(
                face.position[0] / 8.0 + light.x,
                face.position[1] / 8.0 + light.y,
                face.position[2] / 8.0 + light.z,
            );
            let mut model = glm::Mat4::identity();
            model = glm::translate(&model, &offset);
            model = glm::rotate(&model, face.yaw_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
            model = glm::scale(&model, &glm::vec3(0.125, 0.125, 0.125));
            model = glm::rotate(&model, face.tilt_deg.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
            self.lamp_shader.set_mat4(gl, "model", &model);
            self.lamp_face.draw(gl);
        }
    }
}

impl Scene for PyramidTwoLights {
    fn draw(&mut self, gl: &glow::Context, frame: &FrameContext) -> Result<(), DemoError> {
        let light0 = glm::vec3(
            LIGHT_POSITIONS[0][0],
            LIGHT_POSITIONS[0][1],
            LIGHT_POSITIONS[0][2],
        );
        let light1 = glm::vec3(
            LIGHT_POSITIONS[1][0],
            LIGHT_POSITIONS[1][1],
            LIGHT_POSITIONS[1][2],
        );

        self.shader.activate(gl);
        self.shader.set_mat4(gl, "view", &frame.view);
        self.shader.set_mat4(gl, "projection", &frame.projection);
        // Object color picked from the brick texture.
        self.shader.set_vec3(gl, "objectColor", &glm::vec3(0.46, 0.36, 0.25));
        self.shader.set_vec3(gl, "lightColor", &glm::vec3(0.0, 1.0, 0.0));
        self.shader.set_vec3(gl, "lightColor1", &glm::vec3(1.0, 0.0, 0.0));
        self.shader.set_vec3(gl, "lightPos", &light0);
        self.shader.set_vec3(gl, "lightPos1", &light1);
        self.shader.set_vec3(gl, "viewPos", &frame.camera_position);

        self.bricks.bind(gl);
        for face in &PYRAMID_FACES {
            self.shader.set_mat4(gl, "model", &face.model_matrix());
            self.face.draw(gl);
        }
        Texture2d::unbind(gl);
        ShaderProgram::deactivate(gl);

        self.lamp_shader.activate(gl);
        self.lamp_shader.set_mat4(gl, "view", &frame.view);
        self.lamp_shader.set_mat4(gl, "projection", &frame.projection);
        self.draw_lamp(gl, &light0);
        self.draw_lamp(gl, &light1);
        ShaderProgram::deactivate(gl);

        Ok(())
    }

    fn destroy(&mut self, gl: &glow::Context) {
        self.face.destroy(gl);
        self.lamp_face.destroy(gl);
        self.bricks.destroy(gl);
        self.shader.destroy(gl);
        self.lamp_shader.destroy(gl);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = DemoOptions {
        title: "Pyramid Two Lights",
        camera: CameraConfig {
            position: glm::vec3(0.0, 0.0, 6.0),
            radius: 6.0,
            ..CameraConfig::default()
        },
        ..DemoOptions::default()
    };

    glshapes::run(options, |gl| {
        Ok(Box::new(PyramidTwoLights {
            shader: ShaderProgram::new(gl, VERTEX_SHADER, FRAGMENT_SHADER)?,
            lamp_shader: ShaderProgram::new(gl, LAMP_VERTEX_SHADER, LAMP_FRAGMENT_SHADER)?,
            face: Mesh::new(gl, &PYRAMID_FACE_VERTICES, &TRIANGLE_INDICES, &POS_COLOR_UV_NORMAL)?,
            lamp_face: Mesh::new(gl, &LAMP_TRIANGLE_VERTICES, &TRIANGLE_INDICES, &POS_ONLY)?,
            bricks: Texture2d::from_file_or_checkerboard(gl, "bricks.png")?,
        }))
    })?;

    Ok(())
}
