//! E2E тесты для CLI инструмента `bondconv`.
//!
//! Проверяем полный прогон: фильтрация шума, склейка пар строк и обе
//! перестановки разделителей, а также фатальные сценарии (нет входного
//! файла, запись без числового токена адреса).

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска bondconv.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn bondconv() -> Command {
    Command::cargo_bin("bondconv").unwrap()
}

// ============================================================================
// Успешная конвертация
// ============================================================================

#[test]
fn test_attachment_to_csv() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("new.csv");

    bondconv()
        .args([
            "--input",
            fixture("attachment_a.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 2 record(s)"));

    // Ровно две записи: граница склейки отбрасывает хвостовые пары
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "F1234;2020;06;15;00;BOND SURETY CO;/;JOHN;AGENT;100 MAIN ST SPRINGFIELD\n\
         J1002;2020;07;01;00;BOND ACME SURETY;/;JANE;AGENT;200 OAK AVE SHELBYVILLE\n"
    );
}

#[test]
fn test_bond_token_isolated_from_address() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("new.csv");

    bondconv()
        .args([
            "--input",
            fixture("attachment_a.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    let first = content.lines().next().unwrap();

    // Bond-номер — первое ';'-поле, адрес — пробельный хвост
    assert!(first.starts_with("F1234;"));
    assert!(first.ends_with("100 MAIN ST SPRINGFIELD"));
}

// ============================================================================
// Конфигурация
// ============================================================================

#[test]
fn test_config_file_lowers_address_threshold() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("new.csv");

    // Порог 5 из pipeline_config.json отбрасывает все пары
    bondconv()
        .args([
            "--input",
            fixture("attachment_a.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--config",
            fixture("pipeline_config.json").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 0 record(s)"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_cli_override_beats_config_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("new.csv");

    bondconv()
        .args([
            "--input",
            fixture("attachment_a.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--config",
            fixture("pipeline_config.json").to_str().unwrap(),
            "--max-address-length",
            "60",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 2 record(s)"));
}

#[test]
fn test_unmatched_prefixes_yield_empty_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("new.csv");

    // Префикс Z9 не встречается; числовые адресные строки остаются,
    // но их слишком мало для склейки
    bondconv()
        .args([
            "--input",
            fixture("attachment_a.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--prefix",
            "Z9",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 0 record(s)"));
}

// ============================================================================
// Фатальные сценарии
// ============================================================================

#[test]
fn test_missing_input_file_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("new.csv");

    bondconv()
        .args(["--input", "no_such_attachment.txt", "--output", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));

    assert!(!output.exists());
}

#[test]
fn test_missing_address_number_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("new.csv");

    bondconv()
        .args([
            "--input",
            fixture("attachment_bad_address.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find address number"));

    // Конвертация всё-или-ничего: файл не создаётся при ошибке
    assert!(!output.exists());
}

#[test]
fn test_bad_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.json");
    fs::write(&config, "not json").unwrap();

    bondconv()
        .args([
            "--input",
            fixture("attachment_a.txt").to_str().unwrap(),
            "--output",
            dir.path().join("new.csv").to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
