//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg`
//! and serves `static/` locally for manual testing.

use std::process::{Command, ExitCode, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8000";

fn wasm_pack() -> Result<(), String> {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => Ok(()),
        Ok(_) => Err("wasm-pack finished with errors".to_owned()),
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever is already in static/pkg.");
            Ok(())
        }
    }
}

fn serve() -> Result<(), String> {
    let port = env::var("FLOORS_PORT").unwrap_or_else(|_| PORT.to_owned());
    println!("Launching local server at http://127.0.0.1:{port} …");
    Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to start http server: {e}"))?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = wasm_pack().and_then(|_| serve()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
