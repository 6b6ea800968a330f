// tests/unit_merge.rs
//! Reconciliation behavior against pre-existing mock files.

use mocksmith::config::Config;
use mocksmith::diagnostics::Diagnostics;
use std::fs;
use std::path::Path;

fn write(dir: &Path, rel: &str, content: &str) {
    let p = dir.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

fn run_files(files: Vec<std::path::PathBuf>, force: bool) -> Diagnostics {
    let mut config = Config::new();
    config.files = files;
    config.force = force;
    let mut diags = Diagnostics::silent();
    mocksmith::run(&config, &mut diags).unwrap();
    diags
}

#[test]
fn test_method_append_inserts_only_new_methods() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(
        app,
        "foo.service.ts",
        "export class Foo {\n  a() {}\n  b() {}\n  c() {}\n}\n",
    );
    // Existing mock knows a and b; manual comment must survive untouched.
    let prior = "// manual tweak\nexport const MockFoo = jasmine.createSpyObj('MockFoo', [\n  'a',\n  'b'\n]);\n";
    write(app, "foo.service.mock.ts", prior);

    run_files(vec![app.join("foo.service.ts")], false);

    let merged = fs::read_to_string(app.join("foo.service.mock.ts")).unwrap();
    assert_eq!(
        merged,
        "// manual tweak\nexport const MockFoo = jasmine.createSpyObj('MockFoo', [\n  'c',\n  'a',\n  'b'\n]);\n"
    );
}

#[test]
fn test_method_append_no_new_methods_skips() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(app, "foo.service.ts", "export class Foo {\n  a() {}\n}\n");
    let prior = "export const MockFoo = jasmine.createSpyObj('MockFoo', [\n  'a'\n]);\n";
    write(app, "foo.service.mock.ts", prior);

    run_files(vec![app.join("foo.service.ts")], false);

    assert_eq!(
        fs::read_to_string(app.join("foo.service.mock.ts")).unwrap(),
        prior
    );
}

#[test]
fn test_hand_reshaped_mock_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(app, "foo.service.ts", "export class Foo {\n  a() {}\n}\n");
    // A hand-rewritten mock without the spy-object shape: anchor is gone.
    let prior = "export const MockFoo = {\n  custom: true\n};\n";
    write(app, "foo.service.mock.ts", prior);

    let diags = run_files(vec![app.join("foo.service.ts")], false);

    assert_eq!(
        fs::read_to_string(app.join("foo.service.mock.ts")).unwrap(),
        prior
    );
    assert!(diags.mentions("anchor pattern not found"));
}

#[test]
fn test_append_when_mock_absent_preserves_existing_text() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(app, "bar.service.ts", "export class Bar {\n  go() {}\n}\n");
    let prior = "export const MockOther = {};\n";
    write(app, "bar.service.mock.ts", prior);

    run_files(vec![app.join("bar.service.ts")], false);

    let merged = fs::read_to_string(app.join("bar.service.mock.ts")).unwrap();
    assert!(merged.starts_with("export const MockOther = {};\n\n"));
    assert!(merged.contains("export const MockBar = jasmine.createSpyObj('MockBar', [\n  'go'\n]);\n"));
}

#[test]
fn test_non_service_existing_mock_skips_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(
        app,
        "nav.component.ts",
        "@Component({\n  selector: 'app-nav'\n})\nexport class Nav {}\n",
    );
    let prior = "// hand-maintained\nexport class MockNav {}\n";
    write(app, "nav.component.mock.ts", prior);

    run_files(vec![app.join("nav.component.ts")], false);

    assert_eq!(
        fs::read_to_string(app.join("nav.component.mock.ts")).unwrap(),
        prior
    );
}

#[test]
fn test_force_combines_classes_sharing_a_target() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path();
    write(
        app,
        "pair.component.ts",
        "@Component({\n  selector: 'app-one'\n})\nexport class One {}\n\n@Component({\n  selector: 'app-two'\n})\nexport class Two {}\n",
    );
    // Both mocks already exist from an earlier run.
    write(
        app,
        "pair.component.mock.ts",
        "export class MockOne {}\nexport class MockTwo {}\n",
    );

    run_files(vec![app.join("pair.component.ts")], true);

    let combined = fs::read_to_string(app.join("pair.component.mock.ts")).unwrap();
    let expected_one = "import { Component } from '@angular/core';\n\n@Component({\n  selector: 'app-one',\n  template: '<div>MockOne</div>'\n})\nexport class MockOne {}\n";
    let expected_two = "import { Component } from '@angular/core';\n\n@Component({\n  selector: 'app-two',\n  template: '<div>MockTwo</div>'\n})\nexport class MockTwo {}\n";
    assert_eq!(combined, format!("{expected_one}\n{expected_two}"));
}
