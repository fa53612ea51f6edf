//! Built-in tree used when no host directory is imported.

use super::in_memory_fs::VirtualFs;
use super::types::FsError;

const DEFAULT_DIRS: &[&str] = &["/home", "/home/user", "/home/user/docs", "/etc", "/tmp", "/var", "/var/log"];

const DEFAULT_FILES: &[(&str, &str)] = &[
    ("/home/user/readme.txt", "Welcome to the virtual file system.\nNothing here touches your disk.\n"),
    ("/home/user/docs/notes.txt", "first line\nsecond line\nthird line\n"),
    ("/etc/motd", "Have a nice session.\n"),
    ("/var/log/boot.log", "vfs: mounted default tree\n"),
];

impl VirtualFs {
    /// A small tree with a home directory and a few text files.
    pub fn with_default_tree() -> Self {
        let mut fs = VirtualFs::new();
        // Static layout: parents are listed before children.
        if let Err(e) = populate(&mut fs) {
            log::error!("default tree is inconsistent: {}", e);
        }
        fs
    }
}

fn populate(fs: &mut VirtualFs) -> Result<(), FsError> {
    for dir in DEFAULT_DIRS {
        fs.create_directory(dir)?;
    }
    for (path, content) in DEFAULT_FILES {
        fs.write_file(path, content)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::NodeKind;

    #[test]
    fn test_default_tree_layout() {
        let fs = VirtualFs::with_default_tree();
        assert_eq!(fs.node_count(), 1 + DEFAULT_DIRS.len() + DEFAULT_FILES.len());
        assert_eq!(fs.list_children("/").unwrap(), ["home", "etc", "tmp", "var"]);
        assert_eq!(fs.kind_of("/etc/motd").unwrap(), NodeKind::File);
        assert!(fs.read_file("/home/user/readme.txt").unwrap().starts_with("Welcome"));
    }
}
