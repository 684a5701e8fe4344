use std::io::Write;
use std::process::{Command, Output, Stdio};

fn rbt(args: &[&str], stdin: &str, log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rbt"));
    cmd.args(args)
        .env_remove("RBT_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(level) = log {
        cmd.env("RBT_LOG", level);
    }
    let mut child = cmd.spawn().expect("failed to spawn rbt");
    let mut pipe = child.stdin.take().expect("stdin is piped");
    if !stdin.is_empty() {
        pipe.write_all(stdin.as_bytes())
            .expect("failed to feed rbt stdin");
    }
    drop(pipe);
    child.wait_with_output().expect("failed to wait for rbt")
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn rbt_cli_prints_every_view_matrix() {
    let out = rbt(&["10", "20", "30"], "", None);
    assert!(out.status.success(), "{}", text(&out.stderr));

    let stdout = text(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "size: 3");
    assert_eq!(lines[1], "min: 10");
    assert_eq!(lines[2], "max: 30");
    assert_eq!(lines[3], "infix:  R10  B20  R30 ");
    assert_eq!(lines[4], "prefix:  B20  R10  R30 ");
    assert_eq!(lines[5], "postfix:  R10  R30  B20 ");
    assert_eq!(&lines[6..], ["B20", "├─ R10", "└─ R30"]);
    assert!(out.stderr.is_empty(), "{}", text(&out.stderr));
}

#[test]
fn rbt_cli_skips_duplicates_matrix() {
    let out = rbt(&["10", "20", "30", "20"], "", None);
    assert!(out.status.success());
    assert!(text(&out.stderr).contains("skipping: duplicate key: 20"));
    assert!(text(&out.stdout).starts_with("size: 3\n"));
}

#[test]
fn rbt_cli_rejects_non_integer_matrix() {
    let out = rbt(&["1", "x"], "", None);
    assert_eq!(out.status.code(), Some(1));
    assert!(text(&out.stderr).contains("Not an integer key: x"));
    assert!(out.stdout.is_empty());
}

#[test]
fn rbt_cli_reads_stdin_without_args_matrix() {
    let out = rbt(&[], "5 -3\n 8\n", None);
    assert!(out.status.success(), "{}", text(&out.stderr));
    let stdout = text(&out.stdout);
    assert!(stdout.starts_with("size: 3\nmin: -3\nmax: 8\n"));
    assert!(stdout.contains("infix:  R-3  B5  R8 \n"));
}

#[test]
fn rbt_cli_empty_input_matrix() {
    let out = rbt(&[], "", None);
    assert!(out.status.success(), "{}", text(&out.stderr));
    assert_eq!(
        text(&out.stdout),
        "size: 0\nmin: empty tree\nmax: empty tree\ninfix: \nprefix: \npostfix: \n"
    );
}

#[test]
fn rbt_cli_unknown_log_level_falls_back_matrix() {
    let out = rbt(&["10", "20", "30"], "", Some("bogus"));
    assert!(out.status.success());
    // Warn level: no rebalancing trace on stderr.
    assert!(out.stderr.is_empty(), "{}", text(&out.stderr));
    assert!(text(&out.stdout).starts_with("size: 3\n"));
}

#[test]
fn rbt_cli_trace_log_shows_rotations_matrix() {
    let out = rbt(&["10", "20", "30"], "", Some("trace"));
    assert!(out.status.success());
    assert!(text(&out.stderr).contains("rotate left at 10"));
}
