//! Module-name derivation from source paths.
//!
//! A module's documented name depends only on the file's path: the package
//! hierarchy must match the directory hierarchy, so `pkg/util.d` documents
//! module `pkg.util`. Both navigation links and output file names are built
//! from this derivation.

/// Derive the dotted module name for a root-relative source path.
///
/// Strips the final extension, then replaces every path separator with `.`:
/// - `"a.d"` → `"a"`
/// - `"pkg/util.d"` → `"pkg.util"`
/// - `"pkg/sub/intro.ddoc"` → `"pkg.sub.intro"`
///
/// A leading dot in the file name is not an extension (`".hidden"` stays
/// `".hidden"`). Pure string transformation: no case change, no filesystem
/// access, and no validation that the result is a legal identifier.
pub fn module_name(source: &str) -> String {
    let base_start = source.rfind('/').map_or(0, |sep| sep + 1);
    let stem_end = match source.rfind('.') {
        Some(dot) if dot > base_start => dot,
        _ => source.len(),
    };
    source[..stem_end].replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_source() {
        assert_eq!(module_name("a.d"), "a");
    }

    #[test]
    fn nested_source() {
        assert_eq!(module_name("pkg/util.d"), "pkg.util");
    }

    #[test]
    fn deeply_nested_source() {
        assert_eq!(module_name("pkg/sub/intro.ddoc"), "pkg.sub.intro");
    }

    #[test]
    fn dd_extension_stripped() {
        assert_eq!(module_name("pkg/b.dd"), "pkg.b");
    }

    #[test]
    fn only_final_extension_stripped() {
        assert_eq!(module_name("pkg.util.d"), "pkg.util");
    }

    #[test]
    fn no_extension_kept_whole() {
        assert_eq!(module_name("README"), "README");
    }

    #[test]
    fn leading_dot_is_not_an_extension() {
        assert_eq!(module_name(".hidden"), ".hidden");
        assert_eq!(module_name("pkg/.hidden"), "pkg..hidden");
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(module_name("Pkg/Util.d"), "Pkg.Util");
    }
}
