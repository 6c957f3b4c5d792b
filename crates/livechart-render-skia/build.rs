// File: crates/livechart-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
