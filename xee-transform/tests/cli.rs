use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use xee_transform::USAGE;

const WRAP_DOC: &str = r#"<xsl:transform version="3" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/">
    <o><xsl:value-of select="doc" /></o>
  </xsl:template>
</xsl:transform>"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run<S: AsRef<std::ffi::OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xee-transform"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_one_argument_is_a_usage_error() {
    let output = run(&["a.xml"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        format!("expected 2 or 3 arguments, got 1\n{}\n", USAGE)
    );
}

#[test]
fn test_four_arguments_is_a_usage_error() {
    let output = run(&["a.xml", "b.xsl", "c.xml", "d.xml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("usage: xee-transform"));
}

#[test]
fn test_missing_stylesheet_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "in.xml", "<doc>x</doc>");
    let missing = dir.path().join("missing.xsl");
    let out = dir.path().join("out.xml");

    let output = run(&[input.as_os_str(), missing.as_os_str(), out.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.xsl"), "got {:?}", stderr);
    assert!(!out.exists());
}

#[test]
fn test_single_transform_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "in.xml", "<doc>x</doc>");
    let stylesheet = write(dir.path(), "s.xsl", WRAP_DOC);
    let out = dir.path().join("out.xml");

    let output = run(&[
        std::ffi::OsStr::new("--omit-xml-declaration"),
        input.as_os_str(),
        stylesheet.as_os_str(),
        out.as_os_str(),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(fs::read_to_string(&out).unwrap(), "<o>x</o>\n");
}

fn batch(dir: &Path) -> (PathBuf, PathBuf, String) {
    let a = write(dir, "a.xml", "<doc>a</doc>");
    let b = write(dir, "b.xml", "<doc>b</doc>");
    let inputs = format!("{};{}", a.display(), b.display());
    (a, b, inputs)
}

#[test]
fn test_batch_prints_progress() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b, inputs) = batch(dir.path());
    let stylesheet = write(dir.path(), "s.xsl", WRAP_DOC);

    let output = run(&[inputs.as_str(), stylesheet.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "Transforming {}\nTransforming {}\n",
            a.display(),
            b.display()
        )
    );
    assert!(fs::read_to_string(&a).unwrap().contains("<o>a</o>"));
    assert!(fs::read_to_string(&b).unwrap().contains("<o>b</o>"));
}

#[test]
fn test_quiet_batch_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (a, _, inputs) = batch(dir.path());
    let stylesheet = write(dir.path(), "s.xsl", WRAP_DOC);

    let output = run(&["-q", inputs.as_str(), stylesheet.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(fs::read_to_string(&a).unwrap().contains("<o>a</o>"));
}
