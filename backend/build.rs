use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else if !out_dir.join("dist").exists() {
        // No built frontend yet: keep include_dir! satisfied with a stub page.
        fs::create_dir_all(out_dir.join("dist")).unwrap();
        fs::write(
            out_dir.join("dist/index.html"),
            "<!doctype html><html><body>Frontend bundle not built. Run `trunk build` in frontend/.</body></html>",
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
