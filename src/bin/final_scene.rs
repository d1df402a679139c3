//! Tabletop still life: a textured lapis and a grey cylinder standing on a
//! wood table, with a gold laser pointer and a tan lego brick lying between
//! them. Two point lights (white and yellow), each marked by a small lamp
//! cube. The P key switches between perspective and orthographic
//! projection.

use nalgebra_glm as glm;

use glshapes::geometry::{
    CUBE_FACES, CYLINDER_VERTICES, FaceTransform, LAMP_QUAD_VERTICES, LAPIS_INDICES,
    LAPIS_SWEEP_DEG, POS_COLOR_UV_NORMAL, POS_ONLY, PRISM_INDICES, PRISM_SWEEP_DEG,
    PRISM_VERTICES, QUAD_INDICES, TABLETOP_INDICES, TABLETOP_VERTICES, TEXTURED_LAPIS_VERTICES,
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
    float ambientStrength = 0.4;
    float ambientStrength1 = 0.2;
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

const LIGHT_POSITIONS: [[f32; 3]; 2] = [[0.0, -2.0, 5.0], [-2.0, 0.0, -5.0]];

struct FinalScene {
    shader: ShaderProgram,
    lamp_shader: ShaderProgram,
    lapis: Mesh,
    cylinder: Mesh,
    prism: Mesh,
    table: Mesh,
    lamp_quad: Mesh,
    lapis_texture: Texture2d,
    grey_texture: Texture2d,
    gold_texture: Texture2d,
    tan_texture: Texture2d,
    wood_texture: Texture2d,
}

impl FinalScene {
    fn draw_swept(&self, gl: &glow::Context, mesh: &Mesh, position: [f32; 3]) {
        for yaw_deg in LAPIS_SWEEP_DEG {
            let slice = FaceTransform::new(position, yaw_deg, 0.0);
            self.shader.set_mat4(gl, "model", &slice.model_matrix());
            mesh.draw(gl);
        }
    }

    fn draw_lamp(&self, gl: &glow::Context, light: &glm::Vec3) {
        for face in &CUBE_FACES {
            let offset = glm::vec3(
                face.position[0] / 8.0 + light.x,
                face.position[1] / 8.0 + light.y,
                face.position[2] / 8.0 + light.z,
            );
            let mut model = glm::Mat4::identity();
            model = glm::translate(&model, &offset);
            model = glm::rotate(&model, face.yaw_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
            model = glm::rotate(&model, face.tilt_deg.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
            model = glm::scale(&model, &glm::vec3(0.125, 0.125, 0.125));
            self.lamp_shader.set_mat4(gl, "model", &model);
            self.lamp_quad.draw(gl);
        }
    }
}

impl Scene for FinalScene {
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
        // Textured objects carry their own color; tint them white.
        self.shader.set_vec3(gl, "objectColor", &glm::vec3(1.0, 1.0, 1.0));
        self.shader.set_vec3(gl, "lightColor", &glm::vec3(1.0, 1.0, 1.0));
        self.shader.set_vec3(gl, "lightColor1", &glm::vec3(1.0, 1.0, 0.0));
        self.shader.set_vec3(gl, "lightPos", &light0);
        self.shader.set_vec3(gl, "lightPos1", &light1);
        self.shader.set_vec3(gl, "viewPos", &frame.camera_position);

        // Lapis standing to the right of the table center.
        self.lapis_texture.bind(gl);
        self.draw_swept(gl, &self.lapis, [1.5, 0.0, 0.0]);

        // Cylinder standing to the left.
        self.grey_texture.bind(gl);
        self.draw_swept(gl, &self.cylinder, [-1.5, 0.0, 0.0]);

        // Laser pointer lying on the table, tipped 20 degrees off axis.
        self.gold_texture.bind(gl);
        for yaw_deg in LAPIS_SWEEP_DEG {
            let mut model = glm::Mat4::identity();
            model = glm::translate(&model, &glm::vec3(0.0, -2.835, 0.0));
            model = glm::rotate(&model, 90.0_f32.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
            model = glm::rotate(&model, 20.0_f32.to_radians(), &glm::vec3(0.0, 0.0, 1.0));
            model = glm::rotate(&model, yaw_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
            model = glm::scale(&model, &glm::vec3(0.35, 0.7, 0.35));
            self.shader.set_mat4(gl, "model", &model);
            self.cylinder.draw(gl);
        }

        // Lego nub: a squashed cylinder on top of the brick.
        self.tan_texture.bind(gl);
        for yaw_deg in LAPIS_SWEEP_DEG {
            let mut model = glm::Mat4::identity();
            model = glm::translate(&model, &glm::vec3(-1.0, -2.85, 1.0));
            model = glm::rotate(&model, yaw_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
            model = glm::scale(&model, &glm::vec3(0.15, 0.03, 0.15));
            self.shader.set_mat4(gl, "model", &model);
            self.cylinder.draw(gl);
        }

        // Lego body: four prism slices swept about the brick center.
        for yaw_deg in PRISM_SWEEP_DEG {
            let mut model = glm::Mat4::identity();
            model = glm::translate(&model, &glm::vec3(-1.0, -3.0, 1.0));
            model = glm::rotate(&model, yaw_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
            model = glm::scale(&model, &glm::vec3(0.2, 0.2, 0.2));
            self.shader.set_mat4(gl, "model", &model);
            self.prism.draw(gl);
        }

        // Tabletop.
        self.shader.set_vec3(gl, "objectColor", &glm::vec3(0.46, 0.36, 0.25));
        self.wood_texture.bind(gl);
        self.shader.set_mat4(gl, "model", &glm::Mat4::identity());
        self.table.draw(gl);

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
        self.lapis.destroy(gl);
        self.cylinder.destroy(gl);
        self.prism.destroy(gl);
        self.table.destroy(gl);
        self.lamp_quad.destroy(gl);
        self.lapis_texture.destroy(gl);
        self.grey_texture.destroy(gl);
        self.gold_texture.destroy(gl);
        self.tan_texture.destroy(gl);
        self.wood_texture.destroy(gl);
        self.shader.destroy(gl);
        self.lamp_shader.destroy(gl);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = DemoOptions {
        title: "Final Scene",
        projection_toggle: true,
        camera: CameraConfig {
            position: glm::vec3(0.0, 1.25, 6.0),
            radius: 6.0,
            ..CameraConfig::default()
        },
        ..DemoOptions::default()
    };

    glshapes::run(options, |gl| {
        Ok(Box::new(FinalScene {
            shader: ShaderProgram::new(gl, VERTEX_SHADER, FRAGMENT_SHADER)?,
            lamp_shader: ShaderProgram::new(gl, LAMP_VERTEX_SHADER, LAMP_FRAGMENT_SHADER)?,
            lapis: Mesh::new(gl, &TEXTURED_LAPIS_VERTICES, &LAPIS_INDICES, &POS_COLOR_UV_NORMAL)?,
            cylinder: Mesh::new(gl, &CYLINDER_VERTICES, &LAPIS_INDICES, &POS_COLOR_UV_NORMAL)?,
            prism: Mesh::new(gl, &PRISM_VERTICES, &PRISM_INDICES, &POS_COLOR_UV_NORMAL)?,
            table: Mesh::new(gl, &TABLETOP_VERTICES, &TABLETOP_INDICES, &POS_COLOR_UV_NORMAL)?,
            lamp_quad: Mesh::new(gl, &LAMP_QUAD_VERTICES, &QUAD_INDICES, &POS_ONLY)?,
            lapis_texture: Texture2d::from_file_or_checkerboard(gl, "lapis.jpg")?,
            grey_texture: Texture2d::from_file_or_checkerboard(gl, "grey.png")?,
            gold_texture: Texture2d::from_file_or_checkerboard(gl, "gold.png")?,
            tan_texture: Texture2d::from_file_or_checkerboard(gl, "tan.jpg")?,
            wood_texture: Texture2d::from_file_or_checkerboard(gl, "wood.png")?,
        }))
    })?;

    Ok(())
}
