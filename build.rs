use std::{
    env,
    error::Error,
    process::Command,
    time::{SystemTime, UNIX_EPOCH},
};

/// Variables the release tooling may set to stamp the binary.
const INJECTED_VARS: [&str; 3] = ["LINTCFG_BRANCH", "LINTCFG_COMMIT", "LINTCFG_BUILD_TIME"];

fn main() -> Result<(), Box<dyn Error>> {
    for var in INJECTED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=build.rs");

    let epoch = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    println!("cargo:rustc-env=LINTCFG_BUILD_EPOCH={epoch}");

    // Left unset when rustc can't be queried; the version command skips the line.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let toolchain = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|version| !version.is_empty());

    if let Some(version) = toolchain {
        println!("cargo:rustc-env=LINTCFG_RUSTC_VERSION={version}");
    }

    Ok(())
}
