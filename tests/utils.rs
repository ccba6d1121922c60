use std::fs;
use std::path::Path;

use infill::cli::run;

/// Writes `files` (relative path, content) under `root`, creating parent directories.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Runs infill against `root` with `args` after the shared options and returns stdout.
pub fn run_in(root: &Path, args: &[&str]) -> infill::error::Result<String> {
    let mut raw_args = vec!["infill".to_string(), "--root".to_string()];
    raw_args.push(root.display().to_string());
    raw_args.extend(args.iter().map(|arg| arg.to_string()));

    let mut out = Vec::new();
    run(raw_args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

pub fn is_base64_token(token: &str, length: usize) -> bool {
    token.len() == length
        && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/')
}
