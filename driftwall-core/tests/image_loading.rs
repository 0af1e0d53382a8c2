use std::path::{Path, PathBuf};

use driftwall_core::{LoadError, load_images};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([16, 153, 187, 255]))
        .save(&path)
        .expect("write fixture png");
    path
}

#[tokio::test]
async fn images_arrive_in_input_order() {
    let dir = TempDir::new().expect("tempdir");
    // Decreasing sizes so the small files tend to finish first
    let paths: Vec<PathBuf> = (0..7u32)
        .map(|i| {
            let edge = 240 - i * 30;
            write_png(dir.path(), &format!("{i}.png"), edge, edge + i)
        })
        .collect();

    let images = load_images(&paths).await.expect("all images load");

    assert_eq!(images.len(), paths.len());
    for (i, (image, path)) in images.iter().zip(&paths).enumerate() {
        let i = i as u32;
        assert_eq!(image.source(), path.as_path());
        assert_eq!(
            image.pixels().dimensions(),
            (240 - i * 30, 240 - i * 30 + i)
        );
    }
}

#[tokio::test]
async fn a_missing_image_fails_the_set() {
    let dir = TempDir::new().expect("tempdir");
    let present = write_png(dir.path(), "present.png", 8, 8);
    let missing = dir.path().join("missing.png");

    let err = load_images(&[present, missing.clone()])
        .await
        .expect_err("missing file must fail");

    match err {
        LoadError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn undecodable_bytes_report_a_decode_error() {
    let dir = TempDir::new().expect("tempdir");
    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"definitely not a png").expect("write garbage");

    let err = load_images(&[garbage]).await.expect_err("garbage must fail");
    assert!(matches!(err, LoadError::Decode { .. }), "got {err}");
}

#[tokio::test]
async fn an_empty_list_is_rejected() {
    let paths: [PathBuf; 0] = [];
    let err = load_images(&paths).await.expect_err("empty list must fail");
    assert!(matches!(err, LoadError::Empty));
}
