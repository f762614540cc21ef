#[cfg(test)]
mod tests {
    use std::path::Path;

    use gootool_core::asset::naming::{
        inner_format, inner_name, is_wrapped, logical_components, resolve, wrapped_name, BIN_SUFFIX,
    };
    use gootool_core::types::AssetError;

    #[test]
    fn wrapped_names() {
        assert!(is_wrapped("properties/text.xml.bin"));
        assert!(is_wrapped("GoingUp.level.BIN"));
        assert!(!is_wrapped("text.xml"));
        assert!(!is_wrapped(".bin"));
        assert!(!is_wrapped("bin"));
    }

    #[test]
    fn bare_suffix_is_not_wrapped_in_any_directory() {
        assert!(!is_wrapped("res/.bin"));
        assert!(!is_wrapped("res\\.BIN"));
        assert_eq!(inner_name("res/.bin"), "res/.bin");
        assert_eq!(wrapped_name("res/.bin"), "res/.bin.bin");
        assert!(is_wrapped("res/a.bin"));
        assert!(!is_wrapped("res.bin/text.xml"));
    }

    #[test]
    fn inner_and_wrapped_are_inverse() {
        assert_eq!(inner_name("text.xml.bin"), "text.xml");
        assert_eq!(inner_name("text.xml"), "text.xml");
        assert_eq!(wrapped_name("text.xml"), "text.xml.bin");
        assert_eq!(wrapped_name("text.xml.bin"), "text.xml.bin");
        assert_eq!(inner_name(&wrapped_name("island1.xml")), "island1.xml");
        assert!(wrapped_name("a").ends_with(BIN_SUFFIX));
    }

    #[test]
    fn inner_format_of_compound_suffix() {
        assert_eq!(inner_format("res/islands/island1.xml.bin"), Some("xml"));
        assert_eq!(inner_format("res/levels/GoingUp/GoingUp.level.bin"), Some("level"));
        assert_eq!(inner_format("res/blob.bin"), None);
        assert_eq!(inner_format("text.xml"), None);
        assert_eq!(inner_format("res.d/noext.bin"), None);
    }

    #[test]
    fn logical_paths_split_on_separators() {
        assert_eq!(
            logical_components("res/levels//GoingUp/./GoingUp.scene.bin").unwrap(),
            vec!["res", "levels", "GoingUp", "GoingUp.scene.bin"]
        );
        assert_eq!(logical_components("res\\fx\\x.bin").unwrap(), vec!["res", "fx", "x.bin"]);
    }

    #[test]
    fn escaping_paths_rejected() {
        for bad in ["", "   ", "/etc/passwd", "\\share", "C:/game", "res/../../x", "./."] {
            assert!(
                matches!(logical_components(bad), Err(AssetError::InvalidPath { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn resolve_joins_onto_root() {
        let root = Path::new("/games/WorldOfGoo");
        let path = resolve(root, "properties/text.xml.bin").unwrap();
        assert_eq!(path, root.join("properties").join("text.xml.bin"));
    }
}
