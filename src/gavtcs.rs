use std::cmp::Ordering;
use std::fmt;

/// A `groupId:artifactId` pair, used for dependency exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ga {
    pub group_id: String,
    pub artifact_id: String,
}

impl Ga {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Ga {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// `*:*`, excluding every transitive dependency.
    pub fn wildcard() -> Self {
        Ga::new("*", "*")
    }
}

/// A dependency coordinate: groupId, artifactId, version, and the optional
/// type, classifier and scope, plus exclusions.
///
/// Two coordinates count as the same dependency when groupId, artifactId,
/// type, classifier and scope match; the version is deliberately ignored so
/// that the same logical dependency at another version is still "present".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gavtcs {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub ty: Option<String>,
    pub classifier: Option<String>,
    pub scope: Option<String>,
    pub exclusions: Vec<Ga>,
}

impl Gavtcs {
    /// A plain compile scoped jar dependency.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Gavtcs {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            ty: None,
            classifier: None,
            scope: None,
            exclusions: Vec::new(),
        }
    }

    /// A test scoped dependency.
    pub fn test_jar(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Gavtcs {
            scope: Some("test".to_string()),
            ..Gavtcs::new(group_id, artifact_id, version)
        }
    }

    /// A virtual dependency: test scoped, type `pom`, excluding everything.
    /// Pulls in a BOM's test-only aggregation without its real dependencies.
    pub fn virtual_dep(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Gavtcs {
            ty: Some("pom".to_string()),
            scope: Some("test".to_string()),
            exclusions: vec![Ga::wildcard()],
            ..Gavtcs::new(group_id, artifact_id, version)
        }
    }

    /// A BOM import: type `pom`, scope `import`.
    pub fn import_bom(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Gavtcs {
            ty: Some("pom".to_string()),
            scope: Some("import".to_string()),
            ..Gavtcs::new(group_id, artifact_id, version)
        }
    }

    /// The type with the `jar` default applied.
    pub(crate) fn effective_type(&self) -> &str {
        self.ty.as_deref().unwrap_or("jar")
    }

    /// The scope with the `compile` default applied.
    pub(crate) fn effective_scope(&self) -> &str {
        self.scope.as_deref().unwrap_or("compile")
    }

    /// Whether `other` is the same logical dependency. Version excluded.
    pub fn matches(&self, other: &Gavtcs) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.effective_type() == other.effective_type()
            && self.classifier == other.classifier
            && self.effective_scope() == other.effective_scope()
    }
}

impl fmt::Display for Gavtcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(ty) = &self.ty {
            write!(f, ":{}", ty)?;
        }
        if let Some(scope) = &self.scope {
            write!(f, ":{}", scope)?;
        }
        Ok(())
    }
}

/// A total order over [`Gavtcs`], used only to pick the sibling position of
/// a newly inserted `<dependency>`.
///
/// Deliberately never alphabetic-only: conventional POMs group test scoped
/// dependencies after compile scoped ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GavtcsComparator {
    /// Scope class first, then type, then groupId and artifactId.
    ScopeAndTypeFirst,
    /// groupId and artifactId first, then scope and type.
    GroupFirst,
}

fn scope_rank(scope: &str) -> u8 {
    match scope {
        "import" => 0,
        "compile" => 1,
        "provided" => 2,
        "runtime" => 3,
        "system" => 4,
        "test" => 5,
        _ => 6,
    }
}

fn type_rank(ty: &str) -> u8 {
    match ty {
        "pom" => 0,
        "jar" => 1,
        _ => 2,
    }
}

impl GavtcsComparator {
    pub fn compare(&self, a: &Gavtcs, b: &Gavtcs) -> Ordering {
        match self {
            GavtcsComparator::ScopeAndTypeFirst => {
                scope_rank(a.effective_scope())
                    .cmp(&scope_rank(b.effective_scope()))
                    .then_with(|| type_rank(a.effective_type()).cmp(&type_rank(b.effective_type())))
                    .then_with(|| a.effective_type().cmp(b.effective_type()))
                    .then_with(|| a.group_id.cmp(&b.group_id))
                    .then_with(|| a.artifact_id.cmp(&b.artifact_id))
                    .then_with(|| a.classifier.cmp(&b.classifier))
            }
            GavtcsComparator::GroupFirst => a
                .group_id
                .cmp(&b.group_id)
                .then_with(|| a.artifact_id.cmp(&b.artifact_id))
                .then_with(|| scope_rank(a.effective_scope()).cmp(&scope_rank(b.effective_scope())))
                .then_with(|| type_rank(a.effective_type()).cmp(&type_rank(b.effective_type())))
                .then_with(|| a.classifier.cmp(&b.classifier)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_excluded_from_matching() {
        let a = Gavtcs::new("org.acme", "a1", "1.0.0");
        let b = Gavtcs::new("org.acme", "a1", "2.0.0");
        assert!(a.matches(&b));
    }

    #[test]
    fn scope_distinguishes_dependencies() {
        let compile = Gavtcs::new("org.acme", "a1", "1.0.0");
        let test = Gavtcs::test_jar("org.acme", "a1", "1.0.0");
        assert!(!compile.matches(&test));
    }

    #[test]
    fn jar_and_compile_are_defaults() {
        let mut explicit = Gavtcs::new("org.acme", "a1", "1.0.0");
        explicit.ty = Some("jar".to_string());
        explicit.scope = Some("compile".to_string());
        assert!(explicit.matches(&Gavtcs::new("org.acme", "a1", "1.0.0")));
    }

    #[test]
    fn test_scope_orders_after_compile() {
        let compile = Gavtcs::new("org.acme", "z", "1.0.0");
        let test = Gavtcs::test_jar("org.acme", "a", "1.0.0");
        assert_eq!(
            GavtcsComparator::ScopeAndTypeFirst.compare(&compile, &test),
            Ordering::Less
        );
    }

    #[test]
    fn group_first_ignores_scope_until_tie() {
        let compile = Gavtcs::new("org.acme", "a", "1.0.0");
        let test = Gavtcs::test_jar("org.acme", "a", "1.0.0");
        assert_eq!(
            GavtcsComparator::GroupFirst.compare(&compile, &test),
            Ordering::Less
        );
    }
}
