use std::path::Path;

use glow::HasContext;

use crate::error::DemoError;

/// Mipmapped 2D RGBA texture.
pub struct Texture2d {
    raw: glow::NativeTexture,
}

impl Texture2d {
    /// Decode an image file and upload it.
    pub fn from_file(gl: &glow::Context, path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let image = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = image.dimensions();
        Self::from_rgba(gl, width, height, image.as_raw())
    }

    /// Two-color checkerboard, used when a demo's texture file is not next
    /// to the binary so every demo still runs from a bare checkout.
    pub fn checkerboard(
        gl: &glow::Context,
        cells: u32,
        cell_px: u32,
        a: [u8; 3],
        b: [u8; 3],
    ) -> Result<Self, DemoError> {
        let side = cells * cell_px;
        let mut pixels = Vec::with_capacity((side * side * 4) as usize);
        for y in 0..side {
            for x in 0..side {
                let even = ((x / cell_px) + (y / cell_px)) % 2 == 0;
                let rgb = if even { a } else { b };
                pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        Self::from_rgba(gl, side, side, &pixels)
    }

    /// Upload the file if it exists, otherwise fall back to a checkerboard.
    pub fn from_file_or_checkerboard(
        gl: &glow::Context,
        path: impl AsRef<Path>,
    ) -> Result<Self, DemoError> {
        let path = path.as_ref();
        match Self::from_file(gl, path) {
            Ok(texture) => Ok(texture),
            Err(e) => {
                log::warn!(
                    "texture {} unavailable ({e}), using checkerboard fallback",
                    path.display()
                );
                Self::checkerboard(gl, 8, 16, [178, 101, 78], [141, 70, 54])
            }
        }
    }

    fn from_rgba(
        gl: &glow::Context,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<Self, DemoError> {
        unsafe {
            let raw = gl.create_texture().map_err(DemoError::from)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(raw));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);
            Ok(Self { raw })
        }
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_texture(glow::TEXTURE_2D, Some(self.raw)) };
    }

    pub fn unbind(gl: &glow::Context) {
        unsafe { gl.bind_texture(glow::TEXTURE_2D, None) };
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.raw) };
    }
}
