//! Build script for picam-sys FFI bindings.
//!
//! It supports two modes:
//!
//! 1. With `picam-sdk` feature: Generates bindings from the vendor `picam.h`
//!    with bindgen and links against the PICam library
//! 2. Without feature: `src/dummy.rs` supplies the declarations and nothing
//!    is linked

#[cfg(feature = "picam-sdk")]
use std::env;
#[cfg(feature = "picam-sdk")]
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=wrapper.h");
    println!("cargo:rerun-if-env-changed=PICAM_SDK_DIR");
    println!("cargo:rerun-if-env-changed=PICAM_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=PICAM_LIB_DIR");

    #[cfg(feature = "picam-sdk")]
    {
        generate_bindings();
        link_library();
    }
}

#[cfg(feature = "picam-sdk")]
fn is_windows() -> bool {
    env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "windows")
}

#[cfg(feature = "picam-sdk")]
fn generate_bindings() {
    // Allow PICAM_INCLUDE_DIR to override the SDK layout
    let include_dir = match env::var("PICAM_INCLUDE_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => match env::var("PICAM_SDK_DIR") {
            Ok(sdk) if is_windows() => PathBuf::from(sdk).join("Includes"),
            Ok(sdk) => PathBuf::from(sdk).join("includes"),
            Err(_) => PathBuf::from("/opt/PrincetonInstruments/picam/includes"),
        },
    };

    println!("cargo:rerun-if-changed={}", include_dir.join("picam.h").display());

    let bindings = bindgen::Builder::default()
        .header("wrapper.h")
        .clang_arg(format!("-I{}", include_dir.display()))
        // Allow all PICam functions
        .allowlist_function("Picam_.*")
        // Allow all PICam types and the pi* primitives
        .allowlist_type("Picam.*")
        .allowlist_type("pi.*")
        // Keep constants at top level as `Type_Variant` (matches dummy bindings)
        .default_enum_style(bindgen::EnumVariation::Consts)
        .prepend_enum_name(false)
        // Derive common traits
        .derive_debug(true)
        .derive_default(true)
        .derive_copy(true)
        .derive_partialeq(true)
        .derive_eq(true)
        // Parse block comments as doc comments
        .generate_comments(true)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("Unable to generate PICam bindings");

    // Enumerations without negative values come out as c_uint on some
    // compilers. picam.h passes them as piint everywhere.
    let source = bindings
        .to_string()
        .lines()
        .map(|line| {
            if line.starts_with("pub type Picam") && line.ends_with("= ::std::os::raw::c_uint;") {
                line.replace("::std::os::raw::c_uint", "piint")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    std::fs::write(out_path.join("bindings.rs"), source).expect("Couldn't write bindings!");
}

#[cfg(feature = "picam-sdk")]
fn link_library() {
    let windows = is_windows();

    // Allow PICAM_LIB_DIR to override the default lib path
    let lib_dir = match env::var("PICAM_LIB_DIR") {
        Ok(dir) => Some(PathBuf::from(dir)),
        Err(_) => env::var("PICAM_SDK_DIR").ok().map(|sdk| {
            let sdk = PathBuf::from(sdk);
            if windows {
                sdk.join("Libraries").join("x64")
            } else {
                sdk.join("lib")
            }
        }),
    };

    match lib_dir {
        Some(dir) if dir.exists() => {
            println!("cargo:rustc-link-search=native={}", dir.display());
        }
        Some(dir) => {
            // Libraries may be installed globally (e.g. /usr/local/lib).
            println!(
                "cargo:warning=PICam lib path does not exist: {}",
                dir.display()
            );
        }
        None => {
            // Linux installers put libpicam.so under /usr/local/lib
            for path in ["/usr/local/lib", "/usr/lib", "/opt/PrincetonInstruments/picam/lib"] {
                if Path::new(path).join("libpicam.so").exists() {
                    println!("cargo:rustc-link-search=native={}", path);
                    break;
                }
            }
        }
    }

    if windows {
        println!("cargo:rustc-link-lib=Picam");
    } else {
        println!("cargo:rustc-link-lib=picam");
    }
}
