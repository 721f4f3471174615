//! Property tests for template name derivation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use templater::{derive_name, file_extension};

fn segment() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_-]{0,10}"
}

proptest! {
    #[test]
    fn derived_name_is_relative_path_without_extension(
        dirs in prop::collection::vec(segment(), 0..4),
        stem in segment(),
        ext in "[a-z]{1,5}",
    ) {
        let root = Path::new("/srv/views");
        let mut path = PathBuf::from(root);
        for dir in &dirs {
            path.push(dir);
        }
        path.push(format!("{stem}.{ext}"));

        let mut expected = dirs.clone();
        expected.push(stem);

        prop_assert_eq!(derive_name(root, &path), Some(expected.join("/")));
        prop_assert_eq!(file_extension(&path), Some(ext));
    }

    #[test]
    fn only_the_last_extension_is_stripped(
        stem in segment(),
        inner in "[a-z]{1,5}",
        ext in "[a-z]{1,5}",
    ) {
        let root = Path::new("/views");
        let path = root.join(format!("{stem}.{inner}.{ext}"));

        prop_assert_eq!(derive_name(root, &path), Some(format!("{stem}.{inner}")));
    }
}
