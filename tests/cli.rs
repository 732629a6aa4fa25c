use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct TestEnv {
    tmp: TempDir,
    home: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { tmp, home }
    }

    fn project(&self) -> PathBuf {
        self.tmp.path().join("demo")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cobra-scaffold").unwrap();
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    fn init(&self) {
        self.cmd()
            .arg("init")
            .arg(self.project())
            .args(["--pkg-name", "example.com/demo", "--author", "Jane Doe", "--license", "mit"])
            .assert()
            .success()
            .stdout(contains("[Success] demo is ready."));
    }

    fn add(&self, name: &str) -> assert_cmd::assert::Assert {
        self.cmd()
            .arg("add")
            .arg(name)
            .arg("--path")
            .arg(self.project())
            .args(["--pkg-name", "example.com/demo"])
            .assert()
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}

#[test]
fn init_then_add_two_commands() {
    let env = TestEnv::new();
    env.init();
    env.add("serve").success().stdout(contains("Registered BuildServeCmd"));
    env.add("status").success();

    let root = env.project();
    for file in [
        "cmd/demo/main.go",
        "pkg/demo/root.go",
        "pkg/demo/commands/serve.go",
        "pkg/demo/commands/status.go",
        "LICENSE",
    ] {
        assert!(root.join(file).is_file(), "{file} missing");
    }

    let root_go = read(&root.join("pkg/demo/root.go"));
    assert_eq!(root_go.matches("\"example.com/demo/pkg/demo/commands\"").count(), 1);
    assert!(!root_go.contains("//+cobra:commandsImport"));
    assert!(root_go.contains(
        "\trootCmd.AddCommand(commands.BuildServeCmd())\n\
         \trootCmd.AddCommand(commands.BuildStatusCmd())\n\
         \t//+cobra:subcommands\n"
    ));
    assert_eq!(root_go.matches("//+cobra:subcommands").count(), 1);

    assert!(read(&root.join("pkg/demo/commands/status.go")).contains("func BuildStatusCmd() *cobra.Command"));
    assert!(read(&root.join("LICENSE")).contains("Jane Doe"));
}

#[test]
fn only_first_add_reports_import() {
    let env = TestEnv::new();
    env.init();
    env.add("serve")
        .success()
        .stdout(contains("✓ Imported example.com/demo/pkg/demo/commands in"));
    env.add("status")
        .success()
        .stdout(contains("Registered BuildStatusCmd"))
        .stdout(contains("✓ Imported").not());
}

#[test]
fn reinit_keeps_registered_commands() {
    let env = TestEnv::new();
    env.init();
    env.add("serve").success();
    let root_file = env.project().join("pkg/demo/root.go");
    let before = fs::read(&root_file).unwrap();

    env.cmd()
        .arg("init")
        .arg(env.project())
        .args(["--pkg-name", "example.com/demo"])
        .assert()
        .success()
        .stdout(contains("Kept existing"));

    assert_eq!(fs::read(&root_file).unwrap(), before);
}

#[test]
fn add_before_init_fails_without_writing() {
    let env = TestEnv::new();
    fs::create_dir_all(env.project()).unwrap();

    env.add("serve")
        .failure()
        .stderr(contains("cobra-scaffold init"));

    assert_eq!(fs::read_dir(env.project()).unwrap().count(), 0);
}

#[test]
fn dry_run_shows_diff_and_writes_nothing() {
    let env = TestEnv::new();
    env.init();
    let root_file = env.project().join("pkg/demo/root.go");
    let before = fs::read(&root_file).unwrap();

    env.cmd()
        .args(["add", "foo", "--dry-run", "--pkg-name", "example.com/demo", "--path"])
        .arg(env.project())
        .assert()
        .success()
        .stdout(contains("rootCmd.AddCommand(commands.BuildFooCmd())"))
        .stdout(contains("[Dry run]"));

    assert_eq!(fs::read(&root_file).unwrap(), before);
    assert!(!env.project().join("pkg/demo/commands").exists());
}

#[test]
fn config_file_supplies_defaults() {
    let env = TestEnv::new();
    let config = env.tmp.path().join("cobra.yaml");
    fs::write(&config, "author: Config Author\nyear: 2021\nlicense: bsd\nuseViper: true\n").unwrap();

    env.cmd()
        .arg("init")
        .arg(env.project())
        .args(["--pkg-name", "example.com/demo", "--config"])
        .arg(&config)
        .assert()
        .success();

    let license = read(&env.project().join("LICENSE"));
    assert!(license.starts_with("Copyright © 2021 Config Author\n"));
    assert!(license.contains("Neither the name of the copyright holder"));

    env.add("serve").success();
    let root_go = read(&env.project().join("pkg/demo/root.go"));
    assert!(root_go.contains(
        "import (\n\
         \t\"fmt\"\n\
         \t\"os\"\n\
         \n\
         \t\"example.com/demo/pkg/demo/commands\"\n\
         \t\"github.com/spf13/cobra\"\n\
         \t\"github.com/spf13/viper\"\n\
         )\n"
    ));
    assert!(root_go.contains(")\n\nvar cfgFile string\n\n// BuildRootCmd"));
    assert!(root_go.contains("\n\trootCmd.PersistentFlags().StringVar(&cfgFile"));
}

#[test]
fn pkg_name_read_from_go_mod() {
    let env = TestEnv::new();
    fs::create_dir_all(env.project()).unwrap();
    fs::write(env.project().join("go.mod"), "module example.com/fromgomod\n\ngo 1.22\n").unwrap();

    env.cmd().arg("init").arg(env.project()).assert().success();

    assert!(read(&env.project().join("cmd/demo/main.go")).contains("import \"example.com/fromgomod/pkg/demo\""));
}

#[test]
fn invalid_command_name_rejected() {
    let env = TestEnv::new();
    env.init();

    env.add("bad-name")
        .failure()
        .stderr(contains("invalid command name 'bad-name'"));
}

#[test]
fn unknown_license_rejected() {
    let env = TestEnv::new();

    env.cmd()
        .arg("init")
        .arg(env.project())
        .args(["--pkg-name", "example.com/demo", "--license", "wtfpl"])
        .assert()
        .failure()
        .stderr(contains("unknown license 'wtfpl'"));

    assert!(!env.project().exists());
}

#[test]
fn completion_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(contains("cobra-scaffold"));
}
