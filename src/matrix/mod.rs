//! Static intra-workspace dependency matrix.
//!
//! The matrix records, for each publishable package, which sibling packages it
//! references with a workspace specifier and which dependency sections those
//! references live in during development versus in a published manifest. It is
//! built once at startup and passed explicitly to the mutation engine.

/// Version specifier meaning "resolve to the sibling package in this repository"
pub const WORKSPACE_SPEC: &str = "workspace:*";

/// One rewritable dependency reference on a consuming package's manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Key used inside the dependency sections (the published package name)
    pub dependency_name: &'static str,
    /// Workspace package whose own `version` field supplies the pinned range
    pub version_from: &'static str,
    /// Section holding the reference during development
    pub source_field: &'static str,
    /// Section the reference must occupy in the published manifest
    pub target_field: &'static str,
}

/// A package together with its rewritable dependency references
#[derive(Debug, Clone)]
pub struct MatrixEntry {
    /// Consuming package name (directory under `packages/`)
    pub package: &'static str,
    /// Edges applied in declaration order
    pub edges: Vec<DependencyEdge>,
}

/// Ordered mapping from package name to its dependency edges
#[derive(Debug, Clone)]
pub struct DependencyMatrix {
    entries: Vec<MatrixEntry>,
}

impl DependencyMatrix {
    /// The built-in matrix for this repository's packages.
    ///
    /// Store and debug are consumed by the other packages at development time
    /// through `workspace:*` references; everything listed here gets pinned
    /// before publish. Packages without intra-workspace dependencies do not
    /// appear.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                MatrixEntry {
                    package: "artifacts",
                    edges: vec![DependencyEdge {
                        dependency_name: "@ai-sdk-tools/store",
                        version_from: "store",
                        source_field: "devDependencies",
                        target_field: "dependencies",
                    }],
                },
                MatrixEntry {
                    package: "cache",
                    edges: vec![
                        DependencyEdge {
                            dependency_name: "@ai-sdk-tools/store",
                            version_from: "store",
                            source_field: "devDependencies",
                            target_field: "dependencies",
                        },
                        DependencyEdge {
                            dependency_name: "@ai-sdk-tools/debug",
                            version_from: "debug",
                            source_field: "devDependencies",
                            target_field: "dependencies",
                        },
                    ],
                },
                MatrixEntry {
                    package: "devtools",
                    edges: vec![DependencyEdge {
                        dependency_name: "@ai-sdk-tools/store",
                        version_from: "store",
                        source_field: "devDependencies",
                        target_field: "dependencies",
                    }],
                },
                MatrixEntry {
                    package: "memory",
                    edges: vec![DependencyEdge {
                        dependency_name: "@ai-sdk-tools/debug",
                        version_from: "debug",
                        source_field: "dependencies",
                        target_field: "dependencies",
                    }],
                },
            ],
        }
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[MatrixEntry] {
        &self.entries
    }

    /// Number of packages in the matrix
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unique `version_from` packages, in order of first appearance
    pub fn version_sources(&self) -> Vec<&'static str> {
        let mut sources = Vec::new();
        for entry in &self.entries {
            for edge in &entry.edges {
                if !sources.contains(&edge.version_from) {
                    sources.push(edge.version_from);
                }
            }
        }
        sources
    }
}
