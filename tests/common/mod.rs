use std::fs;
use std::path::PathBuf;

const UPDATE_VAR: &str = "LINKSEQ_UPDATE_SNAPSHOTS";

/// Golden files live under `tests/snapshots/render/<name>.txt`.
fn render_snapshot_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/snapshots/render")
        .join(format!("{}.txt", name))
}

/// Compare rendered lines with the golden file `name`, one rendering per line.
///
/// Set `LINKSEQ_UPDATE_SNAPSHOTS=1` to rewrite the golden file instead.
pub fn assert_render_snapshot(name: &str, rendered: &[String]) {
    let path = render_snapshot_path(name);
    let actual = rendered.join("\n");

    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::create_dir_all(path.parent().expect("snapshot path has a parent"))
            .expect("create snapshot directory");
        fs::write(&path, format!("{}\n", actual)).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("missing golden file {:?}; run with {}=1", path, UPDATE_VAR));
    let expected: Vec<&str> = expected.lines().collect();
    let actual: Vec<&str> = actual.lines().collect();

    if let Some(line) = (0..expected.len().max(actual.len()))
        .find(|&i| expected.get(i) != actual.get(i))
    {
        panic!(
            "render snapshot '{}' differs at line {}\n  expected: {:?}\n  actual:   {:?}\nSet {}=1 to regenerate.",
            name,
            line + 1,
            expected.get(line),
            actual.get(line),
            UPDATE_VAR
        );
    }
}
