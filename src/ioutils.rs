use std::path::{Path, PathBuf};

use crate::constants::{POPULATED_SUFFIX, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};

pub fn read_template<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path.as_ref()).map_err(Error::IoError)
}

/// Path of the populated artifact for the template at `template_path`.
///
/// The trailing `.TEMPLATE` is replaced by `.POPULATED`; a name without the
/// template suffix simply gets `.POPULATED` appended.
pub fn populated_path<P: AsRef<Path>>(template_path: P) -> PathBuf {
    let template_path = template_path.as_ref();
    let file_name = template_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&file_name);
    template_path.with_file_name(format!("{stem}{POPULATED_SUFFIX}"))
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_template_suffix() {
        assert_eq!(populated_path("a/b.TEMPLATE"), PathBuf::from("a/b.POPULATED"));
        assert_eq!(
            populated_path("/etc/app/.env.TEMPLATE"),
            PathBuf::from("/etc/app/.env.POPULATED")
        );
    }

    #[test]
    fn keeps_inner_extensions() {
        assert_eq!(
            populated_path("conf/nginx.conf.TEMPLATE"),
            PathBuf::from("conf/nginx.conf.POPULATED")
        );
    }

    #[test]
    fn appends_suffix_when_missing() {
        assert_eq!(populated_path("notes.txt"), PathBuf::from("notes.txt.POPULATED"));
    }

    #[test]
    fn write_then_read_back() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let target = tmp_dir.path().join("nested").join("out.POPULATED");
        write_file("hello", &target).unwrap();
        assert_eq!(read_template(&target).unwrap(), "hello");
    }
}
