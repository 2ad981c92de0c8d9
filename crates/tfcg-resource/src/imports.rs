use indexmap::IndexMap;
use tfcg_core::spec::{AssociatedExternalType, Import};

pub const TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types";
pub const BASETYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types/basetypes";
pub const ATTR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/attr";
pub const DIAG_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/diag";
pub const VALIDATOR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/schema/validator";
pub const PLAN_MODIFIER_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";
pub const SCHEMA_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/resource/schema";
pub const BOOL_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault";
pub const FLOAT64_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/float64default";
pub const INT64_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/int64default";
pub const STRING_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/stringdefault";
pub const TFTYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-go/tftypes";
pub const CONTEXT_IMPORT: &str = "context";
pub const FMT_IMPORT: &str = "fmt";

/// An ordered set of imports keyed by path. The first insertion of a path wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    imports: IndexMap<String, Import>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single import, ignoring it if the path is already present or empty.
    pub fn with(mut self, import: Import) -> Self {
        if !import.path.is_empty() && !self.imports.contains_key(&import.path) {
            self.imports.insert(import.path.clone(), import);
        }
        self
    }

    pub fn with_path(self, path: &str) -> Self {
        self.with(Import::new(path))
    }

    /// Set union preserving the receiver's order, then `other`'s.
    pub fn union(self, other: Imports) -> Self {
        other.imports.into_values().fold(self, Imports::with)
    }

    pub fn all(&self) -> Vec<&Import> {
        self.imports.values().collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Only the imports whose package is referenced in `body`.
    pub fn referenced_in(&self, body: &str) -> Imports {
        self.imports
            .values()
            .filter(|import| {
                let used = is_referenced(import, body);
                if !used {
                    log::debug!("dropping unreferenced import {}", import.path);
                }
                used
            })
            .cloned()
            .collect()
    }

    /// Imports sorted by path, the order a Go import block is written in.
    pub fn sorted(&self) -> Vec<&Import> {
        let mut sorted = self.all();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));
        sorted
    }
}

impl FromIterator<Import> for Imports {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        iter.into_iter().fold(Imports::new(), Imports::with)
    }
}

/// Render a single import line for a Go import block.
pub fn import_line(import: &Import) -> String {
    match &import.alias {
        Some(alias) => format!("{alias} \"{}\"", import.path),
        None => format!("\"{}\"", import.path),
    }
}

/// The identifier Go code uses for an imported package: the alias, or the last path
/// segment with any major-version suffix removed.
pub fn package_name(import: &Import) -> &str {
    if let Some(alias) = &import.alias {
        return alias;
    }
    let mut segments = import.path.rsplit('/');
    let last = segments.next().unwrap_or_default();
    let name = if is_major_version(last) {
        segments.next().unwrap_or(last)
    } else {
        last
    };
    match name.rsplit_once(".v") {
        Some((base, version)) if is_version_number(version) => base,
        _ => name,
    }
}

/// Whether `body` refers to the import's package as `<name>.`. Blank and dot imports,
/// and packages whose name cannot be derived from the path, are always kept.
pub fn is_referenced(import: &Import, body: &str) -> bool {
    let name = package_name(import);
    if name == "_" || name == "." || !name.chars().all(is_identifier_char) {
        return true;
    }
    let qualifier = format!("{name}.");
    body.match_indices(&qualifier).any(|(at, _)| {
        body[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !is_identifier_char(c))
    })
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(is_version_number)
}

fn is_version_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Imports needed by generated `To`/`From` conversion functions.
pub fn associated_external_type_imports() -> Imports {
    Imports::new()
        .with_path(BASETYPES_IMPORT)
        .with_path(ATTR_IMPORT)
        .with_path(TFTYPES_IMPORT)
        .with_path(DIAG_IMPORT)
        .with_path(FMT_IMPORT)
        .with_path(CONTEXT_IMPORT)
}

/// The conversion bundle followed by the external type's own import, or nothing
/// when no external type is associated.
pub fn external_type_imports(external: Option<&AssociatedExternalType>) -> Imports {
    match external {
        Some(external) => associated_external_type_imports()
            .union(external.import.clone().into_iter().collect()),
        None => Imports::new(),
    }
}

/// Imports needed by a generated `<Name>Type`/`<Name>Value` pair.
pub fn custom_type_value_imports() -> Imports {
    Imports::new()
        .with_path(TYPES_IMPORT)
        .with_path(BASETYPES_IMPORT)
        .with_path(ATTR_IMPORT)
        .with_path(DIAG_IMPORT)
        .with_path(TFTYPES_IMPORT)
        .with_path(CONTEXT_IMPORT)
        .with_path(FMT_IMPORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(imports: &Imports) -> Vec<&str> {
        imports.all().iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_dedup_keeps_first() {
        let imports = Imports::new()
            .with(Import {
                path: "example.com/a".to_string(),
                alias: Some("first".to_string()),
            })
            .with(Import {
                path: "example.com/a".to_string(),
                alias: Some("second".to_string()),
            });
        assert_eq!(imports.len(), 1);
        assert_eq!(imports.all()[0].alias.as_deref(), Some("first"));
    }

    #[test]
    fn test_union_preserves_order() {
        let left = Imports::new().with_path("b").with_path("a");
        let right = Imports::new().with_path("a").with_path("c");
        assert_eq!(paths(&left.union(right)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_external_type_imports_bundle_first() {
        let external = AssociatedExternalType {
            import: Some(Import::new("example.com/apisdk")),
            type_: "*apisdk.Thing".to_string(),
        };
        let imports = external_type_imports(Some(&external));
        assert_eq!(paths(&imports)[0], BASETYPES_IMPORT);
        assert_eq!(paths(&imports).last(), Some(&"example.com/apisdk"));
        assert!(external_type_imports(None).is_empty());
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name(&Import::new(BASETYPES_IMPORT)), "basetypes");
        assert_eq!(package_name(&Import::new("github.com/example/sdk/v2")), "sdk");
        assert_eq!(package_name(&Import::new("gopkg.in/yaml.v3")), "yaml");
        let aliased = Import {
            path: "example.com/apisdk".to_string(),
            alias: Some("sdk".to_string()),
        };
        assert_eq!(package_name(&aliased), "sdk");
    }

    #[test]
    fn test_referenced_in_drops_unused() {
        let imports = Imports::new()
            .with_path(TYPES_IMPORT)
            .with_path(BASETYPES_IMPORT)
            .with_path(FMT_IMPORT)
            .with_path(CONTEXT_IMPORT);
        let body = "func F(ctx context.Context) basetypes.StringValue {}";
        assert_eq!(
            paths(&imports.referenced_in(body)),
            vec![BASETYPES_IMPORT, CONTEXT_IMPORT]
        );
    }

    #[test]
    fn test_blank_import_kept() {
        let blank = Import {
            path: "example.com/driver".to_string(),
            alias: Some("_".to_string()),
        };
        assert!(is_referenced(&blank, ""));
        assert!(!is_referenced(&Import::new(FMT_IMPORT), "fmtx.Println()"));
    }

    #[test]
    fn test_empty_path_ignored() {
        let imports = Imports::new().with_path("");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_sorted_and_import_line() {
        let imports: Imports = vec![
            Import::new(FMT_IMPORT),
            Import {
                path: "example.com/apisdk".to_string(),
                alias: Some("sdk".to_string()),
            },
            Import::new(CONTEXT_IMPORT),
        ]
        .into_iter()
        .collect();
        let lines: Vec<String> = imports.sorted().into_iter().map(import_line).collect();
        assert_eq!(
            lines,
            vec!["\"context\"", "sdk \"example.com/apisdk\"", "\"fmt\""]
        );
    }
}
