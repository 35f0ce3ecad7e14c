use std::env;

// Exposes MOVIE_SEARCH_VERSION to the crate. Release pipelines stamp the
// patch segment through MOVIE_SEARCH_PATCH_VERSION.
fn main() {
    let version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION not set");

    let (major, minor, patch) = match version.split('.').collect::<Vec<_>>()[..] {
        [major, minor, patch] => (major, minor, patch),
        _ => panic!("package version must be MAJOR.MINOR.PATCH, got {version}"),
    };

    let patch = env::var("MOVIE_SEARCH_PATCH_VERSION").unwrap_or_else(|_| patch.to_string());

    println!("cargo:rustc-env=MOVIE_SEARCH_VERSION={major}.{minor}.{patch}");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=MOVIE_SEARCH_PATCH_VERSION");
}
