use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("sample_inputs.txt");

    cmd.assert().success().stdout(predicate::str::contains("is 288957."));
}
