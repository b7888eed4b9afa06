use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_astro() {
    let output = r"File: levels/astro/01-one-move.txt
. . .
A * B
. . .

Solving...
Total configs: 2
Unique configs: 3
Step 0:
. . .
A * B
. . .

Step 1:
. . .
. A B
. . .

";

    Command::main_binary()
        .unwrap()
        .arg("levels/astro/01-one-move.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_hoppers_forced() {
    let output = r"File: levels/hoppers/01-two-jumps.txt
R * . * .
* G * . *
. * . * .
* . * G *
. * . * .

Solving...
Total configs: 2
Unique configs: 3
Step 0:
R * . * .
* G * . *
. * . * .
* . * G *
. * . * .

Step 1:
. * . * .
* . * . *
. * R * .
* . * G *
. * . * .

Step 2:
. * . * .
* . * . *
. * . * .
* . * . *
. * . * R

";

    Command::main_binary()
        .unwrap()
        .arg("--hoppers")
        .arg("levels/hoppers/01-two-jumps.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = r"File: levels/astro/no-solution.txt
A . .
. . .
. . *

Solving...
Total configs: 0
Unique configs: 1
No solution
";

    Command::main_binary()
        .unwrap()
        .arg("levels/astro/no-solution.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_hint() {
    let output = r"File: levels/astro/02-needs-blocker.txt
A . . . .
. . . . .
. . * . .
B . . . .
. . . . .

Solving...
Next step:
. . . . .
. . . . .
A . * . .
B . . . .
. . . . .

";

    Command::main_binary()
        .unwrap()
        .arg("--hint")
        .arg("levels/astro/02-needs-blocker.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_stats() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--stats")
        .arg("levels/hoppers/02-two-ways.txt")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("Total configs: 5\nUnique configs: 5\n"));
    assert!(stdout.contains("Reached duplicates total: 1"));
    assert!(stdout.contains("Depth"));
    assert!(stdout.contains("Step 3:\n. . . . . . . . R . .\n"));
}

#[test]
fn run_parse_error() {
    // a hoppers level forced to parse as astro
    let output = r"File: levels/hoppers/no-solution.txt
Failed to parse: Invalid coordinates on line 2
";

    Command::main_binary()
        .unwrap()
        .arg("--astro")
        .arg("levels/hoppers/no-solution.txt")
        .assert()
        .failure()
        .stdout(output);
}

#[test]
fn run_missing_file() {
    let output = Command::main_binary()
        .unwrap()
        .arg("levels/astro/does-not-exist.txt")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("Can't read file levels/astro/does-not-exist.txt in "));
}

#[test]
fn run_timeout() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--timeout")
        .arg("0")
        .arg("levels/astro/01-one-move.txt")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("File: levels/astro/01-one-move.txt\n"));
    assert!(stdout.ends_with("Solving...\nSearch timed out\n"));
    assert!(!stdout.contains("Total configs"));
}

#[test]
fn run_verbose() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--verbose")
        .arg("levels/hoppers/02-two-ways.txt")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    for depth in 0..4 {
        assert!(stdout.contains(&format!("Visited new depth: {}\n", depth)));
    }
    assert!(!stdout.contains("Visited new depth: 4"));
    // depths are reported before the final counters
    let last_depth = stdout.find("Visited new depth: 3").unwrap();
    let totals = stdout.find("Total configs: 5\n").unwrap();
    assert!(last_depth < totals);
    assert!(stdout.contains("generated by depth: [0, 2, 2]"));
}

#[test]
fn run_bad_puzzle_args() {
    // doesn't check stderr - it's not deterministic
    // it sometimes complains about --astro and sometimes about --hoppers
    // hopefully should be enough to test that it fails and doesn't print to stdout

    Command::main_binary()
        .unwrap()
        .arg("--astro")
        .arg("--hoppers")
        .arg("levels/astro/01-one-move.txt")
        .assert()
        .failure()
        .stdout("");
}
