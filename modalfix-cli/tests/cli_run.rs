//! End-to-end CLI tests against a temp corpus.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn modalfix() -> Command {
    Command::cargo_bin("modalfix").expect("modalfix binary")
}

const LEGACY: &str = "\
import { useState } from 'react';

export default function LoginPage() {
  const handleSubmit = () => {
    if (!confirm('¿Enviar?')) return;
    alert('✅ Usuario creado exitosamente');
  };
  return null;
}
";

fn create_temp_corpus() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let src = td.path().join("src");
    fs::create_dir_all(src.join("app")).unwrap();
    fs::write(src.join("app").join("login.tsx"), LEGACY).unwrap();
    fs::write(src.join("untouched.ts"), "export const x = 1;\n").unwrap();

    // Must never be rewritten: the provider itself and vendored deps.
    fs::create_dir_all(src.join("node_modules").join("pkg")).unwrap();
    fs::write(
        src.join("node_modules").join("pkg").join("index.tsx"),
        "alert('vendored');\n",
    )
    .unwrap();
    fs::create_dir_all(src.join("context")).unwrap();
    fs::write(
        src.join("context").join("ModalContext.tsx"),
        "export function useModal() { /* provider */ }\nconst fallback = () => alert('x');\n",
    )
    .unwrap();

    td
}

#[test]
fn run_rewrites_corpus_and_writes_artifacts() {
    let temp = create_temp_corpus();

    modalfix()
        .current_dir(temp.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("calls: 2 found, 2 replaced"));

    let migrated = fs::read_to_string(temp.path().join("src/app/login.tsx")).unwrap();
    assert!(migrated.contains("await showSuccess('✅ Usuario creado exitosamente')"));
    assert!(migrated.contains("import { useModal } from '@/context/ModalContext';"));
    assert!(migrated.contains("const handleSubmit = async () => {"));

    // Excluded files untouched.
    let provider = fs::read_to_string(temp.path().join("src/context/ModalContext.tsx")).unwrap();
    assert!(provider.contains("alert('x')"));
    let vendored =
        fs::read_to_string(temp.path().join("src/node_modules/pkg/index.tsx")).unwrap();
    assert_eq!(vendored, "alert('vendored');\n");

    // Artifacts written next to src.
    assert!(temp.path().join("artifacts/modalfix/report.json").exists());
    assert!(temp.path().join("artifacts/modalfix/run.md").exists());
    assert!(temp.path().join("artifacts/modalfix/patch.diff").exists());
}

#[test]
fn dry_run_leaves_sources_untouched() {
    let temp = create_temp_corpus();

    modalfix()
        .current_dir(temp.path())
        .arg("run")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("dry-run: no files were written"));

    let source = fs::read_to_string(temp.path().join("src/app/login.tsx")).unwrap();
    assert_eq!(source, LEGACY);

    let patch =
        fs::read_to_string(temp.path().join("artifacts/modalfix/patch.diff")).unwrap();
    assert!(patch.contains("+    await showSuccess"));
}

#[test]
fn rerunning_reports_no_further_changes() {
    let temp = create_temp_corpus();

    modalfix().current_dir(temp.path()).arg("run").assert().success();
    modalfix()
        .current_dir(temp.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 written"));
}

#[test]
fn rewrite_subcommand_skips_wiring() {
    let temp = create_temp_corpus();

    modalfix()
        .current_dir(temp.path())
        .arg("rewrite")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiring: 0 imports"));

    let migrated = fs::read_to_string(temp.path().join("src/app/login.tsx")).unwrap();
    assert!(migrated.contains("await showSuccess"));
    assert!(!migrated.contains("useModal"));
}

#[test]
fn repair_subcommand_finishes_a_rewritten_corpus() {
    let temp = create_temp_corpus();

    modalfix().current_dir(temp.path()).arg("rewrite").assert().success();
    modalfix()
        .current_dir(temp.path())
        .arg("repair")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiring: 1 imports"));

    let migrated = fs::read_to_string(temp.path().join("src/app/login.tsx")).unwrap();
    assert!(migrated.contains("import { useModal } from '@/context/ModalContext';"));
}

#[test]
fn config_file_module_path_is_honored() {
    let temp = create_temp_corpus();
    fs::write(
        temp.path().join("modalfix.toml"),
        "[wiring]\nmodule_path = \"~/lib/modal\"\n",
    )
    .unwrap();

    modalfix().current_dir(temp.path()).arg("run").assert().success();

    let migrated = fs::read_to_string(temp.path().join("src/app/login.tsx")).unwrap();
    assert!(migrated.contains("import { useModal } from '~/lib/modal';"));
}

#[test]
fn missing_src_root_fails() {
    let temp = tempfile::tempdir().unwrap();

    modalfix()
        .current_dir(temp.path())
        .arg("run")
        .arg("--src-root")
        .arg("./does-not-exist")
        .assert()
        .failure();
}

#[test]
fn unknown_subcommand_fails() {
    modalfix().arg("frobnicate").assert().failure();
}
