use cbindgen::DocumentationStyle;
use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_file: PathBuf = [
        crate_dir.as_ref(),
        "..",
        "target",
        env::var("PROFILE").expect("PROFILE missing").as_ref(),
        "ncfile.h",
    ]
    .iter()
    .collect();

    // Plain C header, usable from C++ as well.
    let config = cbindgen::Config {
        language: cbindgen::Language::C,
        cpp_compat: true,
        include_guard: Some(String::from("NCFILE_H")),
        header: Some(String::from("/* Handles to SQLite backed data files. */")),
        documentation_style: DocumentationStyle::Doxy,
        ..Default::default()
    };

    cbindgen::generate_with_config(&crate_dir, config)
        .unwrap()
        .write_to_file(output_file);

    // On Microsoft Windows: Embed metadata such as the version into the library
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "ncfile");
        res.set("FileDescription", "Handles to SQLite backed data files");
        res.compile().unwrap();
    }
}
