#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// A minimal PNG signature; the builder never decodes image contents.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n";

pub fn write_image(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, PNG_BYTES).expect("write image file");
}

/// Lay out a small two-sensor collection under `root`.
///
/// Eight conforming `.png` files across four scenarios, plus a `.jpg`
/// sibling, a misnamed `.png`, and a non-image file.
pub fn write_collection(root: &Path) {
    for name in [
        "cegr/day/cegr02003_0001_1.png",
        "cegr/day/cegr02003_0002_2.png",
        "cegr/day/cegr02005_0009_1.png",
        "cegr/night/cegr01923_0010_4.png",
        "cegr/night/cegr01923_0003_5.png",
        "i1co/i1co02002_0001_1.png",
        "i1co/i1co02002_0002_2.png",
        "i1co/i1co01926_0001_3.png",
    ] {
        write_image(&root.join(name));
    }

    write_image(&root.join("i1co/i1co02002_0001_9.jpg"));
    write_image(&root.join("i1co/thumbnail.png"));
    fs::write(root.join("README.txt"), "collection notes").expect("write notes");
}
