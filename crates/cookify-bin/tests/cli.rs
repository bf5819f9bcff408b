use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cookify() -> Command {
    let mut cmd = Command::cargo_bin("cookify").unwrap();
    cmd.env_remove("COOKIFY_SAMPLE_ENTITY")
        .env_remove("COOKIFY_INCLUDE_HIDDEN");
    cmd
}

#[test]
fn solution_command_templatizes_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("Foo.sln"), "").unwrap();
    fs::write(root.join("Foo.config"), "Customer: Foo Corp").unwrap();
    fs::create_dir(root.join("CustomerModule")).unwrap();

    cookify()
        .arg("solution")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cookify complete!"))
        .stdout(predicate::str::contains("Solution: Foo"));

    let config = root
        .join("{{cookiecutter.solution_name}}")
        .join("{{cookiecutter.solution_name}}.config");
    assert_eq!(
        fs::read_to_string(config).unwrap(),
        "{{cookiecutter.sample_entity_name}}: {{cookiecutter.solution_name}} Corp"
    );
    let manifest = fs::read_to_string(root.join("cookiecutter.json")).unwrap();
    assert!(manifest.contains("\"sample_entity_name\": \"Customer\""));
}

#[test]
fn sample_entity_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("Shop.sln"), "").unwrap();
    fs::write(root.join("Order.cs"), "class Order {}").unwrap();

    cookify()
        .env("COOKIFY_SAMPLE_ENTITY", "Order")
        .arg("--quiet")
        .arg("solution")
        .arg(root)
        .assert()
        .success();

    let source = root
        .join("{{cookiecutter.solution_name}}")
        .join("{{cookiecutter.sample_entity_name}}.cs");
    assert_eq!(
        fs::read_to_string(source).unwrap(),
        "class {{cookiecutter.sample_entity_name}} {}"
    );
}

#[test]
fn generic_command_writes_manifest_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("README.md"), "Acme Widgets by Acme").unwrap();

    cookify()
        .args(["generic", root.to_str().unwrap(), "-r", "product=Widgets", "-r", "company=Acme"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.join("cookiecutter.json")).unwrap(),
        "{\n    \"product\": \"Widgets\",\n    \"company\": \"Acme\"\n}\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("{{cookiecutter.solution_name}}").join("README.md")).unwrap(),
        "{{cookiecutter.company}} {{cookiecutter.product}} by {{cookiecutter.company}}"
    );
}

#[test]
fn missing_solution_fails() {
    let dir = tempfile::tempdir().unwrap();

    cookify()
        .arg("solution")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No solution files found"));
}

#[test]
fn missing_root_fails() {
    let dir = tempfile::tempdir().unwrap();

    cookify()
        .arg("solution")
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root directory does not exist"));
}
