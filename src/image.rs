use crate::RGB;
use std::io::Write;

/// Size of a densely packed row-major image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Width of the image
    pub width: usize,
    /// Height of the image
    pub height: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait Image {
    type Pixel;

    /// Pixels in row-major order, exactly `shape().len()` of them
    fn data(&self) -> &[Self::Pixel];

    fn shape(&self) -> Shape;

    fn width(&self) -> usize {
        self.shape().width
    }

    fn height(&self) -> usize {
        self.shape().height
    }

    fn get(&self, row: usize, col: usize) -> Option<&Self::Pixel> {
        let shape = self.shape();
        if row >= shape.height || col >= shape.width {
            return None;
        }
        self.data().get(shape.offset(row, col))
    }

    /// Iterate over pixels in row-major order
    fn iter(&self) -> std::slice::Iter<'_, Self::Pixel> {
        self.data().iter()
    }
}

/// Owned row-major image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOwned<P> {
    shape: Shape,
    data: Vec<P>,
}

impl<P> ImageOwned<P> {
    /// Build an image by calling `f(row, col)` exactly once for every pixel
    pub fn new_with<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> P,
    {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col))
            }
        }
        Self {
            shape: Shape::new(height, width),
            data,
        }
    }

    pub fn to_vec(self) -> Vec<P> {
        self.data
    }
}

impl<P> Image for ImageOwned<P> {
    type Pixel = P;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn data(&self) -> &[Self::Pixel] {
        &self.data
    }
}

impl<I> Image for &I
where
    I: Image + ?Sized,
{
    type Pixel = I::Pixel;

    fn shape(&self) -> Shape {
        (*self).shape()
    }

    fn data(&self) -> &[Self::Pixel] {
        (*self).data()
    }
}

/// Encode image as an 8-bit RGB PNG
pub fn write_png<I, W>(image: I, out: W) -> Result<(), png::EncodingError>
where
    I: Image<Pixel = RGB>,
    W: Write,
{
    let shape = image.shape();
    let width = u32::try_from(shape.width).map_err(|_| png::EncodingError::LimitsExceeded)?;
    let height = u32::try_from(shape.height).map_err(|_| png::EncodingError::LimitsExceeded)?;

    let mut encoder = png::Encoder::new(out, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(bytemuck::cast_slice(image.data()))?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_order() {
        let img = ImageOwned::new_with(2, 3, |row, col| (row, col));
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.shape().len(), 6);
        assert_eq!(img.get(1, 2), Some(&(1, 2)));
        assert_eq!(img.get(2, 0), None);
        assert_eq!(img.get(0, 3), None);
        let all: Vec<_> = img.iter().copied().collect();
        assert_eq!(all, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_write_png() -> Result<(), Box<dyn std::error::Error>> {
        let img = ImageOwned::new_with(2, 3, |row, col| RGB::new(row as u8, col as u8, 7));
        let mut bytes = Vec::new();
        write_png(&img, &mut bytes)?;

        let mut reader = png::Decoder::new(bytes.as_slice()).read_info()?;
        let mut data = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut data)?;
        data.truncate(info.buffer_size());
        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(data, bytemuck::cast_slice::<RGB, u8>(img.data()));
        Ok(())
    }
}
