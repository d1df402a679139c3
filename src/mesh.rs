use glow::HasContext;

use crate::error::DemoError;

/// One interleaved `f32` vertex attribute: shader location plus component
/// count. Offsets and stride follow from the declaration order.
#[derive(Debug, Clone, Copy)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
}

impl VertexAttribute {
    pub const fn new(location: u32, components: i32) -> Self {
        Self {
            location,
            components,
        }
    }
}

/// Indexed triangle mesh uploaded once at startup (VAO + VBO + EBO).
pub struct Mesh {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    ebo: glow::NativeBuffer,
    index_count: i32,
}

impl Mesh {
    pub fn new(
        gl: &glow::Context,
        vertices: &[f32],
        indices: &[u32],
        attributes: &[VertexAttribute],
    ) -> Result<Self, DemoError> {
        let stride: i32 = attributes.iter().map(|a| a.components).sum::<i32>() * 4;

        unsafe {
            let vao = gl.create_vertex_array().map_err(DemoError::from)?;
            let vbo = gl.create_buffer().map_err(DemoError::from)?;
            let ebo = gl.create_buffer().map_err(DemoError::from)?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            let mut offset = 0;
            for attribute in attributes {
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    stride,
                    offset,
                );
                gl.enable_vertex_attrib_array(attribute.location);
                offset += attribute.components * 4;
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(Self {
                vao,
                vbo,
                ebo,
                index_count: indices.len() as i32,
            })
        }
    }

    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            gl.delete_buffer(self.ebo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_layout_packs_offsets_in_declaration_order() {
        let attributes = [
            VertexAttribute::new(0, 3),
            VertexAttribute::new(1, 3),
            VertexAttribute::new(2, 2),
            VertexAttribute::new(3, 3),
        ];
        let stride: i32 = attributes.iter().map(|a| a.components).sum::<i32>() * 4;
        assert_eq!(stride, 44);

        let mut offset = 0;
        let mut offsets = Vec::new();
        for attribute in &attributes {
            offsets.push(offset);
            offset += attribute.components * 4;
        }
        assert_eq!(offsets, vec![0, 12, 24, 32]);
        assert_eq!(offset, stride);
    }
}
