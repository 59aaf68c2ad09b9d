use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tally-sort"))
}

#[test]
fn shows_help() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("byCount"));
}

#[test]
fn sorts_words_from_stdin_by_default() {
    tally()
        .write_stdin("pear apple\nfig\n")
        .assert()
        .success()
        .stdout("Total words: 3.\nSorted data: apple fig pear\n");
}

#[test]
fn sorts_numbers_naturally() {
    tally()
        .args(["-dataType", "long"])
        .write_stdin("3 1 2 1")
        .assert()
        .success()
        .stdout("Total numbers: 4.\nSorted data: 1 1 2 3\n");
}

#[test]
fn counts_words() {
    tally()
        .args(["-sortingType", "byCount", "-dataType", "word"])
        .write_stdin("a b a")
        .assert()
        .success()
        .stdout("Total words: 3.\nb: 1 time(s), 33%\na: 2 time(s), 66%\n");
}

#[test]
fn skipped_numbers_reported_on_stderr() {
    tally()
        .args(["-dataType", "long"])
        .write_stdin("1 two 3")
        .assert()
        .success()
        .stdout("Total numbers: 2.\nSorted data: 1 3\n")
        .stderr(predicate::str::contains(
            "\"two\" is not a valid number; it will be skipped",
        ));
}

#[test]
fn unknown_flag_is_skipped() {
    tally()
        .args(["-foo", "-dataType", "long"])
        .write_stdin("2 1")
        .assert()
        .success()
        .stdout("Total numbers: 2.\nSorted data: 1 2\n")
        .stderr(predicate::str::contains(
            "\"-foo\" is not a valid parameter. It will be skipped.",
        ));
}

#[test]
fn sorting_type_without_value_aborts() {
    tally()
        .arg("-sortingType")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No sorting type defined!"));
}

#[test]
fn invalid_data_type_aborts() {
    tally()
        .args(["-dataType", "float"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No data type defined!"));
}

#[test]
fn reads_file_and_appends_report() -> std::io::Result<()> {
    let temp_dir = TempDir::new()?;
    let input_file = temp_dir.path().join("input.txt");
    let output_file = temp_dir.path().join("output.txt");

    fs::write(&input_file, "b line\na line\nb line\n")?;
    fs::write(&output_file, "previous\n")?;

    tally()
        .arg("-dataType")
        .arg("line")
        .arg("-sortingType")
        .arg("byCount")
        .arg("-inputFile")
        .arg(&input_file)
        .arg("-outputFile")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output_content = fs::read_to_string(&output_file)?;
    assert_eq!(
        output_content,
        "previous\nTotal lines: 3.\na line: 1 time(s), 33%\nb line: 2 time(s), 66%\n"
    );
    Ok(())
}

#[test]
fn missing_input_file_fails() -> std::io::Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("missing.txt");

    tally()
        .arg("-inputFile")
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No such file or directory"));
    Ok(())
}

#[test]
fn empty_input_by_count_reports_zero() {
    tally()
        .args(["-sortingType", "byCount"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("Total words: 0.\n");
}

#[test]
fn long_option_with_inline_value() {
    tally()
        .args(["--data-type=long", "--sorting-type=byCount"])
        .write_stdin("3 1 2 1")
        .assert()
        .success()
        .stdout("Total numbers: 4.\n2: 1 time(s), 25%\n3: 1 time(s), 25%\n1: 2 time(s), 50%\n")
        .stderr(predicate::str::contains("not a valid parameter").not());
}

#[test]
fn debug_flag_enables_logging() {
    tally()
        .args(["-sortingType", "byCount", "--debug"])
        .write_stdin("a b a")
        .assert()
        .success()
        .stdout("Total words: 3.\nb: 1 time(s), 33%\na: 2 time(s), 66%\n")
        .stderr(predicate::str::contains("2 distinct values"));
}

#[test]
fn invalid_utf8_input_leaves_no_output_file() -> std::io::Result<()> {
    let temp_dir = TempDir::new()?;
    let output_file = temp_dir.path().join("output.txt");

    tally()
        .arg("-outputFile")
        .arg(&output_file)
        .write_stdin(vec![b'a', b' ', 0xff, 0xfe])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid UTF-8"));

    assert!(!output_file.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_skipped_not_fatal() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    tally()
        .arg(OsStr::from_bytes(b"-\xffbad"))
        .write_stdin("b a")
        .assert()
        .success()
        .stdout("Total words: 2.\nSorted data: a b\n")
        .stderr(predicate::str::contains("is not a valid parameter"));
}
