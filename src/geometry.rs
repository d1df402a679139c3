use nalgebra_glm as glm;

use crate::mesh::VertexAttribute;

/// Attribute layouts shared by the demo vertex tables.
pub const POS_COLOR: [VertexAttribute; 2] = [VertexAttribute::new(0, 3), VertexAttribute::new(1, 3)];
pub const POS_COLOR_UV_NORMAL: [VertexAttribute; 4] = [
    VertexAttribute::new(0, 3),
    VertexAttribute::new(1, 3),
    VertexAttribute::new(2, 2),
    VertexAttribute::new(3, 3),
];
pub const POS_ONLY: [VertexAttribute; 1] = [VertexAttribute::new(0, 3)];

/// Unit quad with per-corner colors (red, green, blue, purple).
#[rustfmt::skip]
pub const COLORED_QUAD_VERTICES: [f32; 24] = [
    -0.5, -0.5, 0.0,   1.0, 0.0, 0.0,
    -0.5,  0.5, 0.0,   0.0, 1.0, 0.0,
     0.5, -0.5, 0.0,   0.0, 0.0, 1.0,
     0.5,  0.5, 0.0,   1.0, 0.0, 1.0,
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 1, 2, 3];

/// Same quad with UVs and a +Z normal, for the lit demos. The normal is
/// carried into world space by the per-face model matrix.
#[rustfmt::skip]
pub const LIT_QUAD_VERTICES: [f32; 44] = [
    -0.5, -0.5, 0.0,   1.0, 0.0, 0.0,   0.0, 0.0,   0.0, 0.0, 1.0,
    -0.5,  0.5, 0.0,   0.0, 1.0, 0.0,   0.0, 1.0,   0.0, 0.0, 1.0,
     0.5, -0.5, 0.0,   0.0, 0.0, 1.0,   1.0, 0.0,   0.0, 0.0, 1.0,
     0.5,  0.5, 0.0,   1.0, 0.0, 1.0,   1.0, 1.0,   0.0, 0.0, 1.0,
];

/// Single leaning triangle used four times to build the textured pyramid.
#[rustfmt::skip]
pub const PYRAMID_FACE_VERTICES: [f32; 33] = [
    -0.5, -0.5, 0.0,   1.0, 0.0, 0.0,   0.0, 0.0,   0.0, 0.0, 1.0,
     0.0,  0.5, 0.0,   0.0, 1.0, 0.0,   0.5, 1.0,   0.0, 0.0, 1.0,
     0.5, -0.5, 0.0,   0.0, 0.0, 1.0,   1.0, 0.0,   0.0, 0.0, 1.0,
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Position-only shapes for the white "lamp" markers at light positions.
#[rustfmt::skip]
pub const LAMP_TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
     0.5, -0.5, 0.0,
];

#[rustfmt::skip]
pub const LAMP_QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.0,
    -0.5,  0.5, 0.0,
     0.5, -0.5, 0.0,
     0.5,  0.5, 0.0,
];

/// The milestone "lapis" profile: a colored kite over a long stem, swept
/// around the Y axis in 60 degree steps.
#[rustfmt::skip]
pub const LAPIS_VERTICES: [f32; 30] = [
    -0.25, -0.5,  0.435,   1.0, 0.0, 0.0,
     0.0,   0.25, 0.0,     0.0, 1.0, 0.0,
     0.25, -0.5,  0.435,   0.0, 0.0, 1.0,
     0.25, -3.0,  0.435,   1.0, 0.0, 1.0,
    -0.25, -3.0,  0.435,   1.0, 0.0, 1.0,
];

pub const LAPIS_INDICES: [u32; 9] = [0, 1, 2, 2, 4, 3, 2, 4, 0];

pub const LAPIS_SWEEP_DEG: [f32; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

/// Lapis profile with UVs and normals, for the lit tabletop scene. The V
/// coordinates run past 1.0 so the texture repeats down the stem.
#[rustfmt::skip]
pub const TEXTURED_LAPIS_VERTICES: [f32; 55] = [
    -0.25, -0.5,  0.435,   1.0, 0.0, 0.0,   0.0, 3.0,     0.0, 0.0, 1.0,
     0.0,   0.25, 0.0,     0.0, 1.0, 0.0,   0.5, 3.435,   0.0, 0.0, 1.0,
     0.25, -0.5,  0.435,   0.0, 0.0, 1.0,   1.0, 3.0,     0.0, 0.0, 1.0,
     0.25, -3.0,  0.435,   1.0, 0.0, 1.0,   1.0, 0.0,     0.0, 0.0, 1.0,
    -0.25, -3.0,  0.435,   1.0, 0.0, 1.0,   0.0, 0.0,     0.0, 0.0, 1.0,
];

/// Same profile flattened at the top (the apex sits at rim height), so the
/// sweep closes into a hexagonal cylinder instead of a spike.
#[rustfmt::skip]
pub const CYLINDER_VERTICES: [f32; 55] = [
    -0.25, -0.5,  0.435,   1.0, 0.0, 0.0,   0.0, 3.0,     0.0, 0.0, 1.0,
     0.0,  -0.5,  0.0,     0.0, 1.0, 0.0,   0.5, 3.435,   0.0, 1.0, 0.0,
     0.25, -0.5,  0.435,   0.0, 0.0, 1.0,   1.0, 3.0,     0.0, 0.0, 1.0,
     0.25, -3.0,  0.435,   1.0, 0.0, 1.0,   1.0, 0.0,     0.0, 0.0, 1.0,
    -0.25, -3.0,  0.435,   1.0, 0.0, 1.0,   0.0, 0.0,     0.0, 0.0, 1.0,
];

/// One wall-plus-roof slice of the rectangular prism: an upright quad with
/// an apex vertex pulled back to the sweep axis.
#[rustfmt::skip]
pub const PRISM_VERTICES: [f32; 55] = [
    -0.5, 0.0, 0.5,   1.0, 0.0, 0.0,   0.0, 0.0,   0.0, 0.0, 1.0,
    -0.5, 0.5, 0.5,   0.0, 1.0, 0.0,   0.0, 1.0,   0.0, 0.0, 1.0,
     0.5, 0.5, 0.5,   0.0, 0.0, 1.0,   1.0, 1.0,   0.0, 0.0, 1.0,
     0.5, 0.0, 0.5,   1.0, 0.0, 1.0,   1.0, 0.0,   0.0, 0.0, 1.0,
     0.0, 0.5, 0.0,   1.0, 0.0, 1.0,   0.5, 1.0,   0.0, 1.0, 0.0,
];

pub const PRISM_INDICES: [u32; 9] = [0, 1, 2, 0, 2, 3, 1, 4, 2];

pub const PRISM_SWEEP_DEG: [f32; 4] = [0.0, 90.0, 180.0, -90.0];

/// Flat brown ground plane under the milestone shape.
#[rustfmt::skip]
pub const GROUND_PLANE_VERTICES: [f32; 24] = [
    -5.0, -3.0,  5.0,   0.57, 0.31, 0.14,
     5.0, -3.0,  5.0,   0.57, 0.31, 0.14,
     5.0, -3.0, -5.0,   0.57, 0.31, 0.14,
    -5.0, -3.0, -5.0,   0.57, 0.31, 0.14,
];

pub const GROUND_PLANE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Tabletop: the same y = -3 plane with UVs and a +Y normal so it takes a
/// wood texture and lighting.
#[rustfmt::skip]
pub const TABLETOP_VERTICES: [f32; 44] = [
    -5.0, -3.0,  5.0,   0.57, 0.31, 0.14,   0.0, 0.0,   0.0, 1.0, 0.0,
     5.0, -3.0, -5.0,   0.57, 0.31, 0.14,   1.0, 1.0,   0.0, 1.0, 0.0,
     5.0, -3.0,  5.0,   0.57, 0.31, 0.14,   1.0, 0.0,   0.0, 1.0, 0.0,
    -5.0, -3.0, -5.0,   0.57, 0.31, 0.14,   0.0, 1.0,   0.0, 1.0, 0.0,
];

pub const TABLETOP_INDICES: [u32; 6] = [0, 1, 2, 0, 1, 3];

/// Placement of one quad/triangle instance: translate, then rotate about
/// world Y, then tilt about X, matching the order the demos apply.
#[derive(Debug, Clone, Copy)]
pub struct FaceTransform {
    pub position: [f32; 3],
    pub yaw_deg: f32,
    pub tilt_deg: f32,
}

impl FaceTransform {
    pub const fn new(position: [f32; 3], yaw_deg: f32, tilt_deg: f32) -> Self {
        Self {
            position,
            yaw_deg,
            tilt_deg,
        }
    }

    pub fn model_matrix(&self) -> glm::Mat4 {
        let mut model = glm::Mat4::identity();
        model = glm::translate(
            &model,
            &glm::vec3(self.position[0], self.position[1], self.position[2]),
        );
        model = glm::rotate(&model, self.yaw_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
        model = glm::rotate(&model, self.tilt_deg.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
        model
    }
}

/// Four upright planes ringed around the origin (camera controls demo).
pub const PLANE_RING: [FaceTransform; 4] = [
    FaceTransform::new([0.0, 0.0, 0.5], 0.0, 0.0),
    FaceTransform::new([0.5, 0.0, 0.0], 90.0, 0.0),
    FaceTransform::new([0.0, 0.0, -0.5], 0.0, 0.0),
    FaceTransform::new([-0.5, 0.0, 0.0], 90.0, 0.0),
];

/// Six quads assembled into a unit cube.
pub const CUBE_FACES: [FaceTransform; 6] = [
    FaceTransform::new([0.0, 0.0, 0.5], 0.0, 0.0),
    FaceTransform::new([0.5, 0.0, 0.0], 90.0, 0.0),
    FaceTransform::new([0.0, 0.0, -0.5], 180.0, 0.0),
    FaceTransform::new([-0.5, 0.0, 0.0], -90.0, 0.0),
    FaceTransform::new([0.0, 0.5, 0.0], 0.0, -90.0),
    FaceTransform::new([0.0, -0.5, 0.0], 0.0, 90.0),
];

/// Four leaning triangles forming the textured pyramid shell.
pub const PYRAMID_FACES: [FaceTransform; 4] = [
    FaceTransform::new([0.0, 0.0, 0.25], 0.0, -30.0),
    FaceTransform::new([0.25, 0.0, 0.0], 90.0, -30.0),
    FaceTransform::new([0.0, 0.0, -0.25], 180.0, -30.0),
    FaceTransform::new([-0.25, 0.0, 0.0], 270.0, -30.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra_glm as glm;

    #[test]
    fn index_tables_stay_within_their_vertex_tables() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < 4));
        assert!(LAPIS_INDICES.iter().all(|&i| (i as usize) < 5));
        assert!(PRISM_INDICES.iter().all(|&i| (i as usize) < 5));
        assert!(GROUND_PLANE_INDICES.iter().all(|&i| (i as usize) < 4));
        assert!(TABLETOP_INDICES.iter().all(|&i| (i as usize) < 4));
    }

    #[test]
    fn vertex_tables_match_their_layouts() {
        assert_eq!(COLORED_QUAD_VERTICES.len() % 6, 0);
        assert_eq!(LIT_QUAD_VERTICES.len() % 11, 0);
        assert_eq!(PYRAMID_FACE_VERTICES.len() % 11, 0);
        assert_eq!(LAPIS_VERTICES.len() % 6, 0);
        assert_eq!(TEXTURED_LAPIS_VERTICES.len() % 11, 0);
        assert_eq!(CYLINDER_VERTICES.len() % 11, 0);
        assert_eq!(PRISM_VERTICES.len() % 11, 0);
        assert_eq!(TABLETOP_VERTICES.len() % 11, 0);
    }

    #[test]
    fn cylinder_shares_the_lapis_profile_except_the_apex() {
        for (i, (c, l)) in CYLINDER_VERTICES
            .iter()
            .zip(TEXTURED_LAPIS_VERTICES.iter())
            .enumerate()
        {
            let vertex = i / 11;
            if vertex == 1 {
                continue;
            }
            assert_eq!(c, l, "component {i} diverges outside the apex vertex");
        }
        // Apex drops from the peak to rim height on the sweep axis.
        assert_eq!(CYLINDER_VERTICES[11..14], [0.0, -0.5, 0.0]);
    }

    #[test]
    fn cube_top_face_points_up() {
        // Tilting the +Z-facing quad by -90 degrees about X must carry its
        // normal to +Y.
        let top = &CUBE_FACES[4];
        let model = top.model_matrix();
        let normal = model * glm::vec4(0.0, 0.0, 1.0, 0.0);
        assert!(normal.x.abs() < 1e-6);
        assert!((normal.y - 1.0).abs() < 1e-6);
        assert!(normal.z.abs() < 1e-6);
    }

    #[test]
    fn face_transform_translates_after_rotation() {
        let face = FaceTransform::new([1.0, 2.0, 3.0], 90.0, 0.0);
        let model = face.model_matrix();
        let origin = model * glm::vec4(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x - 1.0).abs() < 1e-6);
        assert!((origin.y - 2.0).abs() < 1e-6);
        assert!((origin.z - 3.0).abs() < 1e-6);
    }
}
