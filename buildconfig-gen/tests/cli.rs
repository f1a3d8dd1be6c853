//! End-to-end tests driving the `buildconfig-gen` binary.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]

use assert_cmd::Command;
use rstest::{fixture, rstest};
use test_helpers::fs::Utf8TempDir;

const SNAPSHOT: &str = r#"
topobjdir = "/build/obj"
topsrcdir = "/build/src"

[substs]
MOZ_APP_NAME = "Demo App"
NIGHTLY_BUILD = "1"
NSPR_CFLAGS = ["-I/usr/include/nspr4"]
"#;

struct Workspace {
    dir: Utf8TempDir,
}

impl Workspace {
    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_buildconfig-gen"));
        cmd.current_dir(self.dir.path())
            .env_remove("BUILDCONFIG_GEN_SNAPSHOT")
            .env_remove("BUILDCONFIG_GEN_OUTPUT")
            .env_remove("BUILDCONFIG_GEN_FORCE")
            .env("BUILDCONFIG_LOG", "buildconfig_gen=debug");
        cmd
    }

    fn module(&self) -> String {
        self.dir.read("out/buildconfig.rs").expect("read generated module")
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = Utf8TempDir::new().expect("create temp dir");
    dir.write("snapshot.toml", SNAPSHOT).expect("write snapshot");
    Workspace { dir }
}

#[rstest]
fn writes_module_then_reports_it_unchanged(workspace: Workspace) {
    workspace
        .command()
        .args(["--snapshot", "snapshot.toml", "--output", "out/buildconfig.rs"])
        .assert()
        .success();
    let module = workspace.module();
    assert!(module.contains("pub const MOZ_APP_NAME: &str = \"Demo App\";\n"));
    assert!(module.contains("pub const NIGHTLY_BUILD: bool = true;\n"));
    assert!(module.contains("concat!(\"/build/obj/\", $path)"));

    let second = workspace
        .command()
        .args(["--snapshot", "snapshot.toml", "--output", "out/buildconfig.rs"])
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&second.get_output().stderr).into_owned();
    assert!(stderr.contains("output unchanged"), "stderr: {stderr}");
    assert_eq!(workspace.module(), module);
}

#[rstest]
fn check_mode_detects_stale_output(workspace: Workspace) {
    workspace
        .command()
        .args(["--snapshot", "snapshot.toml", "--output", "out/buildconfig.rs", "--check"])
        .assert()
        .failure();
    assert!(!workspace.dir.exists("out/buildconfig.rs").expect("stat output"));

    workspace
        .command()
        .args(["--snapshot", "snapshot.toml", "--output", "out/buildconfig.rs"])
        .assert()
        .success();
    workspace
        .command()
        .args(["--snapshot", "snapshot.toml", "--output", "out/buildconfig.rs", "--check"])
        .assert()
        .success();
}

#[rstest]
fn dash_streams_module_to_stdout(workspace: Workspace) {
    let assert = workspace
        .command()
        .args(["--snapshot", "snapshot.toml", "--output", "-"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.starts_with("\n/// Macro used to name a path in the objdir"));
    assert!(stdout.contains("pub const TOPSRCDIR: &str = \"/build/src\";"));
}

#[rstest]
fn environment_supplies_settings(workspace: Workspace) {
    workspace
        .command()
        .env("BUILDCONFIG_GEN_SNAPSHOT", "snapshot.toml")
        .env("BUILDCONFIG_GEN_OUTPUT", "out/buildconfig.rs")
        .assert()
        .success();
    assert!(workspace.module().contains("macro_rules! srcdir_path"));
}

#[rstest]
fn missing_snapshot_setting_fails(workspace: Workspace) {
    let assert = workspace
        .command()
        .args(["--output", "-"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("snapshot"), "stderr: {stderr}");
}
