use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Name of the facade crate re-exporting every `bp_*` crate.
const FACADE_NAME: &str = "beanpath";
/// Prefix shared by the member crates re-exported from the facade.
const MEMBER_PREFIX: &str = "bp_";
/// Dependency tables searched in order.
const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

/// The parsed `Cargo.toml` of the crate that invokes a proc-macro.
///
/// Generated code has to name `bp_reflect` items through a path that is
/// valid inside the *calling* crate, which may depend on `bp_reflect`
/// directly or only through the `beanpath` facade.
///
/// # Example
///
/// ```rust
/// # use bp_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("bp_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. A direct dependency on the requested crate yields `::bp_reflect`.
/// 2. Otherwise a dependency on `beanpath` yields `::beanpath::reflect`,
///    the member name with its `bp_` prefix removed.
/// 3. Both steps are repeated for `dev-dependencies`.
/// 4. Everything else falls back to `::bp_reflect`.
///
/// A crate referring to itself this way needs an
/// `extern crate self as bp_reflect;` alias in its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .unwrap_or_else(|| panic!("CARGO_MANIFEST_DIR is not set, proc-macros must run under cargo"));
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        path
    }

    #[inline(never)]
    fn load(path: &Path) -> Manifest {
        let modified_time = std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .unwrap_or_else(|e| panic!("Unable to stat cargo manifest {}: {e}", path.display()));
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Unable to read cargo manifest {}: {e}", path.display()))
            .into_boxed_str();
        let manifest = Document::parse(text)
            .unwrap_or_else(|e| panic!("Failed to parse cargo manifest {}: {e}", path.display()));
        Manifest {
            manifest,
            modified_time,
        }
    }

    #[inline]
    fn absolute(segments: &[&str]) -> syn::Path {
        let joined = segments.join("::");
        syn::parse_str(&format!("::{joined}"))
            .unwrap_or_else(|e| panic!("`::{joined}` is not a valid path: {e}"))
    }

    fn find_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }
        let member = name.strip_prefix(MEMBER_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::absolute(&[FACADE_NAME, member]))
    }

    /// Return a [`syn::Path`] for the crate named `name` as seen from the
    /// caller's Cargo.toml. See the type level documentation for the
    /// resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_TABLES
            .iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::find_in(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Run `func` against the caller's manifest.
    ///
    /// Manifests are cached per path and re-read only when the file's
    /// modified time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = std::fs::metadata(&path).and_then(|meta| meta.modified()).ok();

        {
            let cached = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cached.get(&path)
                && Some(manifest.modified_time) == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        format!("::{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nbp_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("bp_reflect")), "::bp_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nbeanpath = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("bp_reflect")), "::beanpath::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nbeanpath = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("bp_reflect")), "::beanpath::reflect");

        let m = manifest("[package]\nname = \"app\"\n");
        assert_eq!(path_string(&m.get_crate_path("bp_reflect")), "::bp_reflect");
    }
}
