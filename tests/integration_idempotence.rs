// tests/integration_idempotence.rs
//! Running the pipeline twice with no source changes must leave every
//! generated file byte-identical, with the second run reporting skips.

use mocksmith::config::Config;
use mocksmith::diagnostics::Diagnostics;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn write(dir: &Path, rel: &str, content: &str) {
    let p = dir.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

fn snapshot(root: &Path) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            out.insert(rel, fs::read_to_string(entry.path()).unwrap());
        }
    }
    out
}

#[test]
fn test_second_run_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(
        app,
        "src/a/foo.service.ts",
        "export class Foo {\n  bar() {}\n  baz() {}\n}\n",
    );
    write(
        app,
        "src/b/nav.component.ts",
        "@Component({\n  selector: 'app-nav'\n})\nexport class NavComponent {}\n",
    );
    write(
        app,
        "src/b/hover.directive.ts",
        "@Directive({\n  selector: '[appHover]'\n})\nexport class HoverDirective {}\n",
    );
    write(
        app,
        "src/c/date.pipe.ts",
        "@Pipe({\n  name: 'niceDate'\n})\nexport class DatePipe {}\n",
    );

    let mut config = Config::new();
    config.app_dir = Some(app.to_path_buf());

    let mut diags = Diagnostics::silent();
    mocksmith::run(&config, &mut diags).unwrap();
    let first = snapshot(app);

    let mut diags = Diagnostics::silent();
    let second_run = mocksmith::run(&config, &mut diags).unwrap();
    let second = snapshot(app);

    assert_eq!(first, second);

    // Every descriptor reports skip-by-already-exists the second time.
    for kind in mocksmith::mock::MockKind::ALL {
        let (mocked, skipped) = second_run.counts(kind);
        assert_eq!(mocked, 0, "{kind:?} should be fully skipped");
        assert_eq!(skipped, 1);
    }
}

#[test]
fn test_new_source_only_adds_delta() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(app, "src/a.service.ts", "export class A {\n  m() {}\n}\n");

    let mut config = Config::new();
    config.app_dir = Some(app.to_path_buf());

    let mut diags = Diagnostics::silent();
    mocksmith::run(&config, &mut diags).unwrap();

    // A hand edit above the generated region must survive the next run.
    let barrel_path = app.join("src/mocks/services.mock.ts");
    let hand_edited = format!(
        "// team note: keep sorted\n{}",
        fs::read_to_string(&barrel_path).unwrap()
    );
    fs::write(&barrel_path, &hand_edited).unwrap();

    write(app, "src/b.service.ts", "export class B {\n  n() {}\n}\n");
    let mut diags = Diagnostics::silent();
    mocksmith::run(&config, &mut diags).unwrap();

    let barrel = fs::read_to_string(&barrel_path).unwrap();
    assert!(barrel.starts_with("// team note: keep sorted\n"));
    assert!(barrel.contains("import { MockB } from '../b.service.mock';"));
    assert!(barrel.contains("MockA"));
    assert!(barrel.contains("MockB"));
    // MockA's own mock file was left alone.
    assert!(app.join("src/a.service.mock.ts").exists());
}
