use std::path::PathBuf;

use tracing::debug;

use crate::document::{Node, PomDocument};
use crate::error::Error;
use crate::gavtcs::{Ga, Gavtcs, GavtcsComparator};
use crate::xmlvalue::Value;

/// A single edit against a POM document.
///
/// Build them with the factory constructors and run them with
/// [`transform`], or apply them one by one with [`Transformation::apply`].
#[derive(Debug, Clone)]
pub enum Transformation {
    /// Add a `<module>` entry to `<modules>`, creating the section if
    /// necessary. Does nothing when the module is already listed.
    AddModule { module: String },
    /// Remove the `<module>` entry with the given text. Does nothing when no
    /// such entry exists.
    RemoveModule {
        remove_preceding_comments: bool,
        remove_preceding_whitespace: bool,
        module: String,
    },
    /// Set a property under `<properties>`, creating the section and the
    /// property if necessary, replacing the value otherwise.
    AddOrSetProperty { name: String, value: String },
    /// Make sure the given chain of container elements exists, e.g.
    /// `["build", "plugins"]`.
    AddContainerElementsIfNeeded { path: Vec<String> },
    /// Append a dependency under `<dependencyManagement><dependencies>`
    /// unless an equivalent one is already managed there.
    AddManagedDependency { dependency: Gavtcs },
    /// Add a dependency under `<dependencies>` unless an equivalent one is
    /// already there, inserting at the position the comparator dictates.
    AddDependencyIfNeeded {
        dependency: Gavtcs,
        comparator: GavtcsComparator,
    },
    /// Remove the container element at the given path, by default only when
    /// it has no content left.
    RemoveContainerElementIfEmpty {
        remove_preceding_comments: bool,
        remove_preceding_whitespace: bool,
        only_if_empty: bool,
        path: Vec<String>,
    },
}

impl Transformation {
    pub fn add_module(module: impl Into<String>) -> Self {
        Transformation::AddModule {
            module: module.into(),
        }
    }

    pub fn remove_module(
        remove_preceding_comments: bool,
        remove_preceding_whitespace: bool,
        module: impl Into<String>,
    ) -> Self {
        Transformation::RemoveModule {
            remove_preceding_comments,
            remove_preceding_whitespace,
            module: module.into(),
        }
    }

    pub fn add_or_set_property(name: impl Into<String>, value: impl Into<String>) -> Self {
        Transformation::AddOrSetProperty {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn add_container_elements_if_needed<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Transformation::AddContainerElementsIfNeeded {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_managed_dependency(dependency: Gavtcs) -> Self {
        Transformation::AddManagedDependency { dependency }
    }

    pub fn add_dependency_if_needed(dependency: Gavtcs, comparator: GavtcsComparator) -> Self {
        Transformation::AddDependencyIfNeeded {
            dependency,
            comparator,
        }
    }

    pub fn remove_container_element_if_empty<I, S>(
        remove_preceding_comments: bool,
        remove_preceding_whitespace: bool,
        only_if_empty: bool,
        path: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Transformation::RemoveContainerElementIfEmpty {
            remove_preceding_comments,
            remove_preceding_whitespace,
            only_if_empty,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Apply this transformation against a parsed document.
    pub fn apply(&self, document: &mut PomDocument) -> Result<(), Error> {
        match self {
            Transformation::AddModule { module } => {
                let project = document.document_element()?;
                if let Some(modules) = document.find_child_element(project, "modules") {
                    let present = document
                        .element_children(modules)
                        .any(|child| document.text_content(child).trim() == module);
                    if present {
                        return Ok(());
                    }
                }
                let modules = document.ensure_section("modules")?;
                let entry = document.new_leaf_element("module", module);
                document.append_entry(modules, entry)
            }
            Transformation::RemoveModule {
                remove_preceding_comments,
                remove_preceding_whitespace,
                module,
            } => {
                let project = document.document_element()?;
                let Some(modules) = document.find_child_element(project, "modules") else {
                    return Ok(());
                };
                let found = document
                    .element_children(modules)
                    .find(|&child| document.text_content(child).trim() == module);
                match found {
                    Some(entry) => document.remove_with_preceding(
                        entry,
                        *remove_preceding_comments,
                        *remove_preceding_whitespace,
                    ),
                    None => Ok(()),
                }
            }
            Transformation::AddOrSetProperty { name, value } => {
                let properties = document.ensure_section("properties")?;
                match document.find_child_element(properties, name) {
                    Some(property) => {
                        let children: Vec<Node> = document.children(property).collect();
                        for child in children {
                            document.remove(child)?;
                        }
                        let text = document.new_text(value);
                        document.append(property, text)
                    }
                    None => {
                        let entry = document.new_leaf_element(name, value);
                        document.append_entry(properties, entry)
                    }
                }
            }
            Transformation::AddContainerElementsIfNeeded { path } => {
                let mut names = path.iter();
                let Some(first) = names.next() else {
                    return Ok(());
                };
                let mut container = document.ensure_section(first)?;
                for name in names {
                    container = document.ensure_child(container, name)?;
                }
                Ok(())
            }
            Transformation::AddManagedDependency { dependency } => {
                let project = document.document_element()?;
                let existing = document
                    .find_child_element(project, "dependencyManagement")
                    .and_then(|management| {
                        document.find_child_element(management, "dependencies")
                    });
                if let Some(dependencies) = existing {
                    let present = document
                        .element_children(dependencies)
                        .any(|child| read_dependency(document, child).matches(dependency));
                    if present {
                        return Ok(());
                    }
                }
                let management = document.ensure_section("dependencyManagement")?;
                let dependencies = document.ensure_child(management, "dependencies")?;
                let node = new_dependency(document, dependencies)?;
                document.append_entry(dependencies, node)?;
                fill_dependency(document, node, dependency)
            }
            Transformation::AddDependencyIfNeeded {
                dependency,
                comparator,
            } => {
                let dependencies = document.ensure_section("dependencies")?;
                let existing: Vec<(Node, Gavtcs)> = document
                    .element_children(dependencies)
                    .map(|child| (child, read_dependency(document, child)))
                    .collect();
                if existing.iter().any(|(_, g)| g.matches(dependency)) {
                    return Ok(());
                }
                let node = new_dependency(document, dependencies)?;
                let successor = existing
                    .iter()
                    .find(|(_, g)| comparator.compare(g, dependency) == std::cmp::Ordering::Greater)
                    .map(|(n, _)| *n);
                match successor {
                    Some(successor) => {
                        document.insert_entry_before(dependencies, node, successor)?
                    }
                    None => document.append_entry(dependencies, node)?,
                }
                fill_dependency(document, node, dependency)
            }
            Transformation::RemoveContainerElementIfEmpty {
                remove_preceding_comments,
                remove_preceding_whitespace,
                only_if_empty,
                path,
            } => {
                if path.is_empty() {
                    return Err(Error::Structural("empty container path".into()));
                }
                let mut node = document.document_element()?;
                for name in path {
                    match document.find_child_element(node, name) {
                        Some(child) => node = child,
                        None => return Ok(()),
                    }
                }
                if *only_if_empty && has_content(document, node) {
                    return Ok(());
                }
                document.remove_with_preceding(
                    node,
                    *remove_preceding_comments,
                    *remove_preceding_whitespace,
                )
            }
        }
    }
}

/// Whether a container element still holds anything besides whitespace.
fn has_content(document: &PomDocument, node: Node) -> bool {
    document.children(node).any(|child| match document.value(child) {
        Value::Text(text) => !text.is_whitespace(),
        Value::Root => false,
        _ => true,
    })
}

/// A fresh, not yet attached `<dependency>` container, closing at the
/// indentation level of an entry of `dependencies`.
fn new_dependency(document: &mut PomDocument, dependencies: Node) -> Result<Node, Error> {
    let depth = document.element_depth(dependencies) + 1;
    Ok(document.new_container_element("dependency", depth))
}

/// Write the coordinate fields into an attached `<dependency>` element, in
/// conventional order. `jar` and `compile` are the defaults and are left
/// out.
fn fill_dependency(
    document: &mut PomDocument,
    node: Node,
    dependency: &Gavtcs,
) -> Result<(), Error> {
    let leaf = |document: &mut PomDocument, name: &str, value: &str| -> Result<(), Error> {
        let entry = document.new_leaf_element(name, value);
        document.append_entry(node, entry)
    };
    leaf(document, "groupId", &dependency.group_id)?;
    leaf(document, "artifactId", &dependency.artifact_id)?;
    leaf(document, "version", &dependency.version)?;
    if let Some(ty) = &dependency.ty {
        if ty != "jar" {
            leaf(document, "type", ty)?;
        }
    }
    if let Some(classifier) = &dependency.classifier {
        leaf(document, "classifier", classifier)?;
    }
    if let Some(scope) = &dependency.scope {
        if scope != "compile" {
            leaf(document, "scope", scope)?;
        }
    }
    if !dependency.exclusions.is_empty() {
        let exclusions = document.ensure_child(node, "exclusions")?;
        for ga in &dependency.exclusions {
            let depth = document.element_depth(exclusions) + 1;
            let exclusion = document.new_container_element("exclusion", depth);
            document.append_entry(exclusions, exclusion)?;
            let group = document.new_leaf_element("groupId", &ga.group_id);
            document.append_entry(exclusion, group)?;
            let artifact = document.new_leaf_element("artifactId", &ga.artifact_id);
            document.append_entry(exclusion, artifact)?;
        }
    }
    Ok(())
}

/// Read the coordinates out of an existing `<dependency>` element.
fn read_dependency(document: &PomDocument, node: Node) -> Gavtcs {
    let exclusions = document
        .find_child_element(node, "exclusions")
        .map(|exclusions| {
            document
                .element_children(exclusions)
                .map(|exclusion| {
                    Ga::new(
                        document
                            .child_element_text(exclusion, "groupId")
                            .unwrap_or_default(),
                        document
                            .child_element_text(exclusion, "artifactId")
                            .unwrap_or_default(),
                    )
                })
                .collect()
        })
        .unwrap_or_default();
    Gavtcs {
        group_id: document
            .child_element_text(node, "groupId")
            .unwrap_or_default(),
        artifact_id: document
            .child_element_text(node, "artifactId")
            .unwrap_or_default(),
        version: document
            .child_element_text(node, "version")
            .unwrap_or_default(),
        ty: document.child_element_text(node, "type"),
        classifier: document.child_element_text(node, "classifier"),
        scope: document.child_element_text(node, "scope"),
        exclusions,
    }
}

/// Parse a document, apply the transformations in order and hand the result
/// to the sink.
///
/// `path` identifies the document in errors and logs; the text itself is
/// obtained from `source` and delivered through `sink`, so callers decide
/// how documents are stored. With an empty transformation list the sink
/// receives the source text byte for byte.
pub fn transform(
    transformations: &[Transformation],
    path: impl Into<PathBuf>,
    source: impl FnOnce() -> String,
    sink: impl FnOnce(String),
) -> Result<(), Error> {
    let path = path.into();
    debug!(path = %path.display(), count = transformations.len(), "transforming");
    let xml = source();
    let result =
        apply_all(transformations, &xml).map_err(|error| error.with_path(&path))?;
    sink(result);
    Ok(())
}

fn apply_all(transformations: &[Transformation], xml: &str) -> Result<String, Error> {
    let mut document = PomDocument::parse(xml)?;
    for transformation in transformations {
        debug!(?transformation, "applying");
        transformation.apply(&mut document)?;
    }
    Ok(document.serialize())
}
