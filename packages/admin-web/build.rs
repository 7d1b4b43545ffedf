//! Bakes `.env` values into the binary.
//!
//! The console runs in the browser, where there is no process environment, so
//! `API_URL` has to be known at compile time. A value already present in the
//! build environment wins over the `.env` file.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=API_URL");

    let Ok(iter) = dotenvy::dotenv_iter() else {
        return;
    };

    for item in iter.flatten() {
        let (key, value) = item;
        if key == "API_URL" && std::env::var_os(&key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
