use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_a_small_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("small.png");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "64x48", "-i", "200", "-t", "1"])
        .assert()
        .success();

    let image = image::open(&out).unwrap().to_luma();
    assert_eq!(image.dimensions(), (64, 48));
    assert!(image.pixels().any(|p| p.0[0] == 0));
    assert!(image.pixels().any(|p| p.0[0] == 255));
}

#[test]
fn renders_a_graymap() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("small.pgm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "32x32", "--center", "-0.75,0.1", "-z", "0.5"])
        .assert()
        .success();

    let raw = std::fs::read(&out).unwrap();
    assert!(raw.starts_with(b"P5"));
}

#[test]
fn output_is_required() {
    Command::cargo_bin("mandel")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn rejects_unparseable_size() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", "never.png", "-s", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_zero_iterations() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", "never.png", "-i", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Iteration count must be between"));
}

#[test]
fn reports_bad_zoom_as_render_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.png");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "8x8", "-z", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Render failure: zoom must be positive"));
    assert!(!out.exists());
}

#[test]
fn reports_empty_image_as_render_failure() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", "never.png", "-s", "0x8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("image width must be greater than zero"));
}
