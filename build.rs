// Copies the static site into `dist/` so it can be deployed as-is.
use std::{env, fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // wasm-pack drives the wasm32 build itself; only host builds stage the site.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    if let Err(e) = fs::create_dir_all(out_dir) {
        println!("cargo:warning=cannot create dist/: {e}");
        return;
    }

    let mut opts = CopyOptions::new();
    opts.content_only = true;
    opts.overwrite = true;
    if let Err(e) = copy(static_dir, out_dir, &opts) {
        println!("cargo:warning=copying static/ to dist/ failed: {e}");
    }
}
