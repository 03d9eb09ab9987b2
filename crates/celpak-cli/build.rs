use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CELPAK_COMMIT");

    // Release packaging can pin the commit when building outside a checkout.
    let commit = env::var("CELPAK_COMMIT")
        .ok()
        .filter(|value| !value.is_empty())
        .map(|value| value.chars().take(7).collect())
        .or_else(|| git_output(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let date = git_output(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=CELPAK_BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=CELPAK_BUILD_DATE={}", date);
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
