//! Named text resources that a `CodeTable` can be loaded from.
//!
//! A `ResourceLoader` turns a resource name such as `country-codes.txt` into a
//! line reader. The bundled loader serves data compiled into the library, the
//! directory loader reads files from disk, and the layered loader tries a list
//! of loaders in order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Component, Path, PathBuf};

use crate::errors::{CountryCodeError, Result};

/// Name of the country code table shipped with the library.
pub const DEFAULT_RESOURCE: &str = "country-codes.txt";

const BUNDLED: &[(&str, &str)] = &[(
    DEFAULT_RESOURCE,
    include_str!("../../resources/country-codes.txt"),
)];

/// Source of named, line-oriented text resources.
pub trait ResourceLoader {
    /// Open the named resource for reading.
    ///
    /// Returns `ResourceNotFound` when this loader has no such resource.
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>>;

    /// Human-readable description used in log events.
    fn describe(&self) -> String;
}

/// Resources compiled into the library.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledResources;

impl BundledResources {
    /// Names of every bundled resource.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }
}

impl ResourceLoader for BundledResources {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        match BUNDLED.iter().find(|(bundled, _)| *bundled == name) {
            Some((_, content)) => Ok(Box::new(Cursor::new(content.as_bytes()))),
            None => Err(CountryCodeError::ResourceNotFound(name.to_string())),
        }
    }

    fn describe(&self) -> String {
        "bundled".to_string()
    }
}

/// Resources read from files inside a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` inside the root, refusing anything but a plain file name.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(name)),
            _ => Err(CountryCodeError::InvalidResourceName(name.to_string())),
        }
    }
}

impl ResourceLoader for DirectoryResources {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        let path = self.resolve(name)?;
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(CountryCodeError::ResourceNotFound(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

/// Tries each loader in order; only `ResourceNotFound` falls through to the next.
pub struct LayeredResources {
    layers: Vec<Box<dyn ResourceLoader>>,
}

impl LayeredResources {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a loader, consulted after those already added.
    pub fn with(mut self, loader: impl ResourceLoader + 'static) -> Self {
        self.layers.push(Box::new(loader));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayeredResources {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLoader for LayeredResources {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        for layer in &self.layers {
            match layer.open(name) {
                Err(CountryCodeError::ResourceNotFound(_)) => {
                    tracing::debug!(resource = name, layer = %layer.describe(), "Resource not in layer");
                }
                other => return other,
            }
        }
        Err(CountryCodeError::ResourceNotFound(name.to_string()))
    }

    fn describe(&self) -> String {
        let names: Vec<String> = self.layers.iter().map(|l| l.describe()).collect();
        format!("layered[{}]", names.join(", "))
    }
}
