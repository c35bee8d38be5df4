//! Integration tests for the dt-cli command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn dicetower() -> Command {
    Command::cargo_bin("dicetower").unwrap()
}

#[test]
fn roll_default_is_one_d20() {
    dicetower()
        .arg("roll")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolling 1D20"))
        .stdout(predicate::str::contains("**Result:**"));
}

#[test]
fn roll_one_sided_dice_are_deterministic() {
    dicetower()
        .args(["roll", "3d1+2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3D1 Result - (1, 1, 1) = (1+2) (1+2) (1+2) = (3, 3, 3)",
        ));
}

#[test]
fn roll_repeats_are_labelled() {
    dicetower()
        .args(["roll", "3", "2d1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolling 2D1 x3"))
        .stdout(predicate::str::contains("**Roll #1:**"))
        .stdout(predicate::str::contains("**Roll #3:**"));
}

#[test]
fn roll_bare_modifier_targets_d20() {
    dicetower()
        .args(["roll", "+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolling 1D20+3"));
}

#[test]
fn roll_rejects_nonsense() {
    dicetower()
        .args(["roll", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice notation"));
}

#[test]
fn roll_rejects_out_of_range_repeat() {
    dicetower()
        .args(["roll", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repeat count must be 1-20"));
}

#[test]
fn roll_rejects_zero_count_dice() {
    dicetower()
        .args(["roll", "0d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dice count must be 1-100"));
}

#[test]
fn roll_json_is_parseable() {
    let output = dicetower()
        .args(["roll", "--json", "2d1+3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["modifier"], 3);
    assert_eq!(parsed[0]["pools"][0]["rolls"], serde_json::json!([1, 1]));
}

#[test]
fn dmg_sums_pools_and_modifier() {
    dicetower()
        .args(["dmg", "2d1+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Damage: 2D1+3"))
        .stdout(predicate::str::contains("(1, 1) + [+3] = 5"));
}

#[test]
fn dmg_repeats_print_a_grand_total() {
    dicetower()
        .args(["dmg", "4", "2d1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Total Damage: 8**"));
}

#[test]
fn adv_marks_the_higher_roll() {
    dicetower()
        .args(["adv", "1d1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Advantage: 1D1"))
        .stdout(predicate::str::contains("**Result: 1** (higher)"));
}

#[test]
fn dis_marks_the_lower_roll() {
    dicetower()
        .args(["dis", "1d1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disadvantage: 1D1"))
        .stdout(predicate::str::contains("**Result: 1** (lower)"));
}

#[test]
fn char_prints_six_stats_and_a_total() {
    dicetower()
        .arg("char")
        .assert()
        .success()
        .stdout(predicate::str::contains("Character Stats (4d6 Drop Lowest)"))
        .stdout(predicate::str::contains("Stat #1:"))
        .stdout(predicate::str::contains("Stat #6:"))
        .stdout(predicate::str::contains("**Total:"));
}

#[test]
fn char_labels_multiple_characters() {
    dicetower()
        .args(["char", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("__Character #1__"))
        .stdout(predicate::str::contains("__Character #2__"));
}

#[test]
fn char_rejects_out_of_range_count() {
    dicetower()
        .args(["char", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repeat count must be 1-20"));
}
