use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for wayfind, isolated from any user config
pub fn wayfind(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("wayfind");
    cmd.current_dir(dir)
        .env("WAYFIND_CONFIG_DIR", dir.join(".user-config"))
        .env_remove("WAYFIND_CONFIG")
        .env_remove("WAYFIND_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Edges `1->2 (1.0)`, `2->3 (1.0)`, `1->3 (5.0)` plus an isolated node 4
pub const EDGES: &str = "1,2,1.0\n2,3,1.0\n1,3,5.0\n4,4,0.0\n";

/// All-zero estimates for nodes 1-4
pub const ZERO_HEURISTICS: &str = "1,0,0,0,0\n2,0,0,0,0\n3,0,0,0,0\n4,0,0,0,0\n";

#[allow(dead_code)]
pub fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Write the standard edge and heuristic fixtures into `dir`
#[allow(dead_code)]
pub fn write_fixtures(dir: &Path) {
    write(dir, "edges.csv", EDGES);
    write(dir, "heuristics.csv", ZERO_HEURISTICS);
}
