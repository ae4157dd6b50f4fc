use std::process::Command;

fn git_short_hash() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    Some(String::from_utf8(out.stdout).ok()?.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    // `noteport --version` reports the commit it was built from
    println!(
        "cargo:rustc-env=GIT_HASH={}",
        git_short_hash().unwrap_or_default()
    );
}
