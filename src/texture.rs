/*!
Typed `wgpu` textures.

Like a typed buffer, a [`Texture<A>`] remembers what its texels are so that
uploads can't write the wrong kind of data. `A` must match the texture format
byte for byte, e.g. [`crate::colour::Colour`] for `Rgba8Unorm`.
*/

use std::{marker::PhantomData, mem::size_of, num::NonZeroU32};

use crate::screen;

pub struct Texture<A> {
    texture: wgpu::Texture,
    size: screen::Size,
    phantom_data: PhantomData<A>,
}

impl<A: bytemuck::Pod + bytemuck::Zeroable> Texture<A> {
    /// Replace the whole texture with `texels`, given in row-major order.
    pub fn write(&self, queue: &wgpu::Queue, texels: &[A]) {
        debug_assert_eq!(texels.len(), self.size.area());

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(texels),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: NonZeroU32::new(self.size.width * size_of::<A>() as u32),
                rows_per_image: NonZeroU32::new(self.size.height),
            },
            extent(self.size),
        );
    }

    pub fn create_view(&self) -> wgpu::TextureView {
        self.texture
            .create_view(&wgpu::TextureViewDescriptor::default())
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }
}

pub struct Builder<'a, A> {
    label: Option<&'a str>,
    size: screen::Size,
    format: wgpu::TextureFormat,
    usage: wgpu::TextureUsages,
    phantom_data: PhantomData<A>,
}

impl<'a, A: bytemuck::Pod + bytemuck::Zeroable> Builder<'a, A> {
    pub fn new(size: screen::Size, format: wgpu::TextureFormat) -> Self {
        Self {
            label: None,
            size,
            format,
            usage: wgpu::TextureUsages::COPY_DST,
            phantom_data: PhantomData,
        }
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_usage(mut self, usage: wgpu::TextureUsages) -> Self {
        self.usage |= usage;
        self
    }

    pub fn create(self, device: &wgpu::Device) -> Texture<A> {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: self.label,
            size: extent(self.size),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.format,
            usage: self.usage,
        });

        Texture {
            texture,
            size: self.size,
            phantom_data: PhantomData,
        }
    }
}

fn extent(size: screen::Size) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width,
        height: size.height,
        depth_or_array_layers: 1,
    }
}
