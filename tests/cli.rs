// Drives the compiled `punbot` binary end to end.

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

fn punbot() -> Command {
    let mut cmd = Command::cargo_bin("punbot").unwrap();
    cmd.env_remove("PUNBOT_API_KEY")
        .env_remove("PUNBOT_MODEL_NAME")
        .env_remove("PUNBOT_API_BASE")
        .env_remove("RUST_LOG");
    cmd
}

fn puns_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"pun": "A", "github_username": "x"}}"#).unwrap();
    writeln!(file, r#"{{"pun": "B"}}"#).unwrap();
    file
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn describe_prints_blurb() {
    let out = stdout_of(punbot().arg("describe"));

    assert_eq!(out, "Making the T-shirt puns work!\n");
}

#[test]
fn create_prints_blank_line_before_each_pun() {
    let file = puns_file();
    let out = stdout_of(punbot().args(["create", "4", "--puns-file"]).arg(file.path()));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 8);
    for pair in lines.chunks(2) {
        assert_eq!(pair[0], "");
        assert!(pair[1] == "@x: A" || pair[1] == "@anon: B", "unexpected {:?}", pair[1]);
    }
}

#[test]
fn create_puns_alias_uses_bundled_list() {
    let out = stdout_of(punbot().args(["create-puns", "2"]));

    assert_eq!(out.lines().filter(|l| l.starts_with('@')).count(), 2);
}

#[test]
fn same_seed_same_puns() {
    let first = stdout_of(punbot().args(["create", "5", "--seed", "11"]));
    let second = stdout_of(punbot().args(["create", "5", "--seed", "11"]));

    assert_eq!(first, second);
}

#[test]
fn json_mode_returns_strings() {
    let file = puns_file();
    let out = stdout_of(
        punbot()
            .args(["create", "3", "--json", "--puns-file"])
            .arg(file.path()),
    );

    let puns: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(puns.len(), 3);
    assert!(puns.iter().all(|p| p == "@x: A" || p == "@anon: B"));
}

#[test]
fn inf_throws_a_party() {
    let out = stdout_of(punbot().args(["create", "inf", "--json"]));

    let lines: Vec<String> = serde_json::from_str(&out).unwrap();
    assert!((50..=200).contains(&lines.len()));
}

#[test]
fn empty_puns_file_is_not_an_error() {
    let file = NamedTempFile::new().unwrap();
    let out = stdout_of(punbot().args(["create", "3", "--puns-file"]).arg(file.path()));

    assert_eq!(
        out,
        "No puns found in puns.json. Consider adding some community-curated puns!\n"
    );
}

#[test]
fn non_numeric_count_is_rejected() {
    punbot().args(["create", "lots"]).assert().failure();
}
