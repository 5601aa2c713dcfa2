use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Debug builds emit debug-level log entries
    if env::var("PROFILE").map(|p| p == "debug").unwrap_or(false) {
        println!("cargo:rustc-cfg=feature=\"debug\"");
    }

    // Host builds run the game core and drivers under test only
    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=atmega128");
        println!("cargo:warning=Building for ATmega128 at 16MHz");
    }
}
