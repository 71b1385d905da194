use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy playground.json to OUT_DIR for include_str. A missing file means
    // "all defaults", which an empty object expresses.
    let config_src = Path::new("assets/playground.json");
    let config_dest = Path::new(&out_dir).join("playground.json");
    if config_src.exists() {
        fs::copy(config_src, &config_dest).unwrap();
    } else {
        fs::write(&config_dest, "{}\n").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/playground.json");
}
