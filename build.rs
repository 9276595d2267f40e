use chrono::Datelike;

fn main() {
    // footer copyright year
    let year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", year);

    println!("cargo:rerun-if-changed=build.rs");
}
