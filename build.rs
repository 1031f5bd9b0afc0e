use std::{env, fs, path::PathBuf};

const DEFAULT_DIGIT_BRIGHTNESS: &str = "50";

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv6m") {
        // Pico 1 (RP2040): copy memory.x to OUT_DIR and hand the linker its scripts
        let memory_x = fs::read_to_string("memory.x").expect("Failed to read memory.x");
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory.x");

        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // 2) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");

    // 3) Validate and expose as compile-time constants
    let digit_brightness = env_or_default("DIGIT_BRIGHTNESS", DEFAULT_DIGIT_BRIGHTNESS);
    if digit_brightness.trim().parse::<u8>().is_err() {
        panic!("DIGIT_BRIGHTNESS must be an integer from 0 to 255, got {digit_brightness:?}");
    }
    println!("cargo:rustc-env=DIGIT_BRIGHTNESS={}", digit_brightness.trim());

    // Optional: don't rebuild unless these change
    println!("cargo:rerun-if-env-changed=DIGIT_BRIGHTNESS");
    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
