//! Captures client-visible variables at build time.
//!
//! Only names carrying the public prefix are written into
//! `$OUT_DIR/public_env.rs`; everything else stays on the server.

use std::env;
use std::fs;
use std::path::PathBuf;

const PUBLIC_PREFIX: &str = "TODO_PUBLIC_";

fn main() {
    let mut vars: Vec<(String, String)> = env::vars()
        .filter(|(key, _)| key.starts_with(PUBLIC_PREFIX))
        .collect();
    vars.sort();

    let mut out = String::from("pub const BUILD_PUBLIC_ENV: &[(&str, &str)] = &[\n");
    for (key, value) in &vars {
        out.push_str(&format!("    ({:?}, {:?}),\n", key, value));
        println!("cargo:rerun-if-env-changed={}", key);
    }
    out.push_str("];\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("public_env.rs"), out).expect("failed to write public_env.rs");

    println!("cargo:rerun-if-changed=build.rs");
}
