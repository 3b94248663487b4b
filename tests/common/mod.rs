//! Shared helpers for pipeline integration tests.
//!
//! The external packaging tool is stood in for by small shell scripts so
//! tests exercise the real subprocess boundary without needing PyInstaller.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable stub packager that accepts the pipeline's argument
/// shape and creates one deterministic artifact in the dist directory.
pub fn ok_packager(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-packager",
        r#"#!/bin/sh
NAME=""
DIST=""
WORK=""
while [ $# -gt 0 ]; do
  case "$1" in
    --onefile) shift ;;
    --name) NAME="$2"; shift 2 ;;
    --distpath) DIST="$2"; shift 2 ;;
    --workpath) WORK="$2"; shift 2 ;;
    --specpath) shift 2 ;;
    *) ENTRY="$1"; shift ;;
  esac
done
[ -n "$NAME" ] || exit 64
[ -d "$DIST" ] || exit 65
mkdir -p "$WORK"
printf 'artifact-bytes\n' > "$DIST/$NAME"
exit 0
"#,
    )
}

/// Stub packager that exits with the given status without producing output.
pub fn failing_packager(dir: &Path, code: i32) -> PathBuf {
    write_script(
        dir,
        "failing-packager",
        &format!("#!/bin/sh\nexit {code}\n"),
    )
}

/// Stub packager that records it was invoked by touching a marker file.
///
/// Used by the fail-fast tests: if the marker exists after a run that was
/// supposed to abort earlier, a later step executed when it should not have.
pub fn tracing_packager(dir: &Path, marker: &Path) -> PathBuf {
    write_script(
        dir,
        "tracing-packager",
        &format!("#!/bin/sh\ntouch \"{}\"\nexit 0\n", marker.display()),
    )
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

/// Lays out a minimal project: a root with an entry-point file.
pub fn project_with_entry(root: &Path) -> PathBuf {
    let entry = root.join("app.py");
    fs::write(&entry, "print('hello')\n").unwrap();
    entry
}

/// Sorted file names directly under a directory.
pub fn dir_entries(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
