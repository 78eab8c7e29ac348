// File: crates/bench-plot/tests/cli.rs
// Purpose: Drive the bench-plot binary end to end: defaults, flags, and failure exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn work_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn bench_plot() -> Command {
    Command::cargo_bin("bench-plot").unwrap()
}

#[test]
fn default_paths_in_working_directory() {
    let dir = work_dir("cli_defaults");
    std::fs::write(dir.join("result.csv"), "fast-gen, 1000000, 2048\nslow-gen, 50000, 1024\n").unwrap();

    bench_plot()
        .current_dir(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("result.png").and(predicate::str::contains("dual mode")));

    let bytes = std::fs::read(dir.join("result.png")).expect("result.png written");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn echoes_loaded_table() {
    let dir = work_dir("cli_echo");
    std::fs::write(dir.join("result.csv"), "jsonsink,3000000\n").unwrap();

    bench_plot()
        .current_dir(&dir)
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("jsonsink"));
}

#[test]
fn explicit_paths_mode_and_size() {
    let dir = work_dir("cli_flags");
    let input = dir.join("bench.csv");
    let output = dir.join("out/chart.png");
    std::fs::write(&input, "a,10,100\nb,20,50\n").unwrap();

    bench_plot()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--mode", "single", "--width", "800", "--height", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("single mode"));

    let img = image::open(&output).expect("decode output").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 300));
}

#[test]
fn bad_number_fails_without_image() {
    let dir = work_dir("cli_bad_number");
    std::fs::write(dir.join("result.csv"), "\"gen-x\",notanumber\n").unwrap();

    bench_plot()
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("notanumber"));
    assert!(!dir.join("result.png").exists());
}

#[test]
fn missing_input_fails() {
    let dir = work_dir("cli_missing");
    bench_plot()
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("result.csv"));
}

#[test]
fn dual_mode_on_single_table_fails() {
    let dir = work_dir("cli_dual_on_single");
    std::fs::write(dir.join("result.csv"), "a,1\n").unwrap();
    bench_plot()
        .current_dir(&dir)
        .args(["-m", "dual"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("peak memory"));
}
