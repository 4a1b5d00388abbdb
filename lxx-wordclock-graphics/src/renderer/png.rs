//! PNG 编解码模块
//!
//! I/O failures map to `StorageError`, codec failures to `RenderError`.

use std::path::Path;

use image::{ImageError, ImageFormat, RgbImage};
use lxx_wordclock_common::*;

use crate::renderer::framebuffer::Framebuffer;

/// 帧缓冲区转 RGB 图像
pub fn to_rgb_image(framebuffer: &Framebuffer) -> SystemResult<RgbImage> {
    RgbImage::from_raw(framebuffer.width(), framebuffer.height(), framebuffer.to_rgb())
        .ok_or_else(|| RenderError::EncodeFailed.into())
}

/// 保存为 PNG 文件
pub fn save_png(framebuffer: &Framebuffer, path: &Path) -> SystemResult<()> {
    let image = to_rgb_image(framebuffer)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| {
            error!("Failed to write {}: {}", path.display(), e);
            match e {
                ImageError::IoError(_) => SystemError::from(StorageError::WriteFailed),
                _ => SystemError::from(RenderError::EncodeFailed),
            }
        })?;
    info!("Exported {}", path.display());
    Ok(())
}

/// 读取图像并转为 RGB
pub fn load_rgb(path: &Path) -> SystemResult<RgbImage> {
    let image = image::open(path).map_err(|e| {
        error!("Failed to read {}: {}", path.display(), e);
        match e {
            ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                SystemError::from(StorageError::NotFound)
            }
            ImageError::IoError(_) => SystemError::from(StorageError::ReadFailed),
            _ => SystemError::from(RenderError::DecodeFailed),
        }
    })?;
    Ok(image.into_rgb8())
}
