#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use minigit::artifacts::objects::codec;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Run the binary from `dir` with no `GIT_DIR`, so the root defaults to `dir/.git`.
pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.env_remove("GIT_DIR");
    cmd.env_remove("RUST_LOG");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Store a loose object under `git_dir/objects` the way git lays it out.
pub fn write_object(git_dir: &Path, hash: &str, header: &str, body: &[u8]) {
    let (shard, file) = hash.split_at(2);
    let shard_path = git_dir.join("objects").join(shard);
    std::fs::create_dir_all(&shard_path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", shard_path, e));

    let content = codec::encode(header, body).expect("Failed to encode object");
    std::fs::write(shard_path.join(file), content)
        .unwrap_or_else(|e| panic!("Failed to write object {}: {}", hash, e));
}

/// A 40 character hash starting with `prefix`, padded with zeros.
pub fn fake_hash(prefix: &str) -> String {
    format!("{:0<40}", prefix)
}
