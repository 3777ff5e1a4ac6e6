// File: crates/chart-render-skia/build.rs
// Summary: statement-chart-skia build script; links the Windows system libraries Skia/ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font and ICU code call RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
