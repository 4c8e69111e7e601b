/// window-bootstrap build script.
///
/// The window itself only exists on Windows. Other targets still build the
/// library (geometry, config, message classification) so the pure parts can
/// be tested anywhere; `run` reports `BootstrapError::Unsupported` there.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=window-bootstrap: no native window on this target \
             (CARGO_CFG_TARGET_OS = {target_os:?}); `run` will return Unsupported"
        );
    }

    // Only re-run the build script when it changes.
    println!("cargo:rerun-if-changed=build.rs");
}
