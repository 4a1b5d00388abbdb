// src/driver/display.rs

//! 面板平面输出
//! 将位平面写成 `.bin` 文件，供面板驱动按返回顺序推送

use std::{
    fs,
    path::{Path, PathBuf},
};

use lxx_wordclock_common::{RefreshMode, StorageError, SystemResult};
use lxx_wordclock_graphics::{PanelPlanes, Plane};

/// 写出平面文件，返回按推送顺序排列的路径
///
/// Frames land next to `input` (or in `out_dir`) as `<stem>.black.bin` and
/// `<stem>.red.bin`. A full refresh first writes an all-paper
/// `<stem>.clear.black.bin` / `<stem>.clear.red.bin` pair that clears the panel;
/// a partial refresh removes any such pair left over from an earlier run.
pub fn write_planes(
    planes: &PanelPlanes,
    mode: RefreshMode,
    input: &Path,
    out_dir: Option<&Path>,
) -> SystemResult<Vec<PathBuf>> {
    let (stem, dir) = plane_location(input, out_dir);

    let mut written = Vec::new();
    if mode == RefreshMode::Full {
        log::info!("Full refresh: clearing panel before the frame");
        write_set(&planes.cleared(), &dir, &format!("{stem}.clear"), &mut written)?;
    } else {
        remove_stale_clear(stem, &dir);
    }
    write_set(planes, &dir, stem, &mut written)?;
    Ok(written)
}

/// 清理上一次整屏刷新留下的清屏文件
fn remove_stale_clear(stem: &str, dir: &Path) {
    for color in ["black", "red"] {
        let path = dir.join(format!("{stem}.clear.{color}.bin"));
        if fs::remove_file(&path).is_ok() {
            log::debug!("Removed stale {}", path.display());
        }
    }
}

fn plane_location<'a>(input: &'a Path, out_dir: Option<&Path>) -> (&'a str, PathBuf) {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    (stem, dir)
}

fn write_set(
    planes: &PanelPlanes,
    dir: &Path,
    stem: &str,
    written: &mut Vec<PathBuf>,
) -> SystemResult<()> {
    let black = dir.join(format!("{stem}.black.bin"));
    write_plane(&planes.black, &black)?;
    written.push(black);

    if let Some(red_plane) = &planes.red {
        let red = dir.join(format!("{stem}.red.bin"));
        write_plane(red_plane, &red)?;
        written.push(red);
    }
    Ok(())
}

fn write_plane(plane: &Plane, path: &Path) -> SystemResult<()> {
    fs::write(path, plane.as_bytes()).map_err(|e| {
        log::error!("Failed to write {}: {}", path.display(), e);
        StorageError::WriteFailed
    })?;
    log::info!(
        "Wrote {}x{} plane to {}",
        plane.width(),
        plane.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lxx_wordclock_common::PanelVariant;
    use lxx_wordclock_graphics::InkThresholds;

    fn red_planes() -> PanelPlanes {
        let image = image::RgbImage::from_pixel(16, 2, image::Rgb([255, 0, 0]));
        PanelPlanes::split(&image, PanelVariant::V2B, InkThresholds::default())
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wordclock-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_writes_one_file_per_plane() {
        let dir = scratch_dir("planes");
        let written =
            write_planes(&red_planes(), RefreshMode::Partial, Path::new("face.png"), Some(&dir))
                .unwrap();

        assert_eq!(written, vec![dir.join("face.black.bin"), dir.join("face.red.bin")]);
        assert_eq!(fs::read(&written[0]).unwrap(), vec![0xFF; 4]);
        assert_eq!(fs::read(&written[1]).unwrap(), vec![0x00; 4]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_full_refresh_clears_before_frame() {
        let dir = scratch_dir("full");
        let written =
            write_planes(&red_planes(), RefreshMode::Full, Path::new("face.png"), Some(&dir))
                .unwrap();

        assert_eq!(
            written,
            vec![
                dir.join("face.clear.black.bin"),
                dir.join("face.clear.red.bin"),
                dir.join("face.black.bin"),
                dir.join("face.red.bin"),
            ]
        );
        assert_eq!(fs::read(&written[0]).unwrap(), vec![0xFF; 4]);
        assert_eq!(fs::read(&written[1]).unwrap(), vec![0xFF; 4]);
        assert_eq!(fs::read(&written[3]).unwrap(), vec![0x00; 4]);

        let written =
            write_planes(&red_planes(), RefreshMode::Partial, Path::new("face.png"), Some(&dir))
                .unwrap();
        assert_eq!(written.len(), 2);
        assert!(!dir.join("face.clear.black.bin").exists());
        assert!(!dir.join("face.clear.red.bin").exists());
        assert!(dir.join("face.black.bin").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
