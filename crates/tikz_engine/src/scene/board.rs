//! Board: the document a scene is drawn on
//!
//! A board collects top-level drawables and wraps their markup in a
//! standalone LaTeX document. Compiling the document is left to the caller.

use log::{debug, info, warn};
use std::path::PathBuf;
use thiserror::Error;

use super::{Drawable, Transformable};
use crate::config::BoardConfig;
use crate::error::GeometryError;

/// Errors raised while writing a board
#[derive(Error, Debug)]
pub enum BoardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A scene failed to construct its objects
    #[error("Scene construction failed: {0}")]
    Geometry(#[from] GeometryError),
}

/// A drawing that fills a board
///
/// Implementors add their objects in [`Scene::construct`].
pub trait Scene {
    /// Name used as the output file stem
    fn name(&self) -> &str;

    /// Build the scene's objects onto `board`
    fn construct(&self, board: &mut Board) -> Result<(), GeometryError>;
}

/// Ordered set of top-level drawables plus document settings
#[derive(Debug, Clone, Default)]
pub struct Board {
    config: BoardConfig,
    objects: Vec<Drawable>,
}

impl Board {
    /// Create an empty board
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            objects: Vec::new(),
        }
    }

    /// Build a board from a scene, naming the output after it
    pub fn from_scene(scene: &impl Scene, config: BoardConfig) -> Result<Self, GeometryError> {
        let mut board = Self::new(config.with_file_stem(scene.name()));
        info!("Constructing scene '{}'", scene.name());
        scene.construct(&mut board)?;
        debug!("Scene '{}' added {} objects", scene.name(), board.objects.len());
        Ok(board)
    }

    /// Add a top-level drawable
    pub fn add(&mut self, object: impl Into<Drawable>) -> &mut Self {
        self.objects.push(object.into());
        self
    }

    /// Top-level drawables in render order
    pub fn objects(&self) -> &[Drawable] {
        &self.objects
    }

    /// Document settings
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// `\documentclass` and `\usepackage` lines
    pub fn header(&self) -> String {
        let mut lines = vec![format!("\\documentclass{{{}}}", self.config.document_class)];
        lines.extend(
            self.config
                .packages
                .iter()
                .map(|package| format!("\\usepackage{{{package}}}")),
        );
        lines.join("\n")
    }

    /// Opening of the document and picture environments
    pub fn begin(&self) -> String {
        let options = if self.config.picture_options.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.config.picture_options.join(", "))
        };
        format!("\\begin{{document}}\n\\begin{{tikzpicture}}{options}")
    }

    /// Closing of the picture and document environments
    pub fn end(&self) -> String {
        "\\end{tikzpicture}\n\\end{document}".to_string()
    }

    /// The complete document
    pub fn render(&self) -> String {
        let body = self
            .objects
            .iter()
            .map(Transformable::render)
            .collect::<Vec<_>>()
            .join("\n");

        [self.header(), self.begin(), body, self.end()].join("\n\n")
    }

    /// Write the document to the configured output path and return that path
    pub fn write(&self) -> Result<PathBuf, BoardError> {
        if self.objects.is_empty() {
            warn!("Writing an empty board");
        }

        std::fs::create_dir_all(&self.config.output_dir)?;
        let path = self.config.output_path();
        std::fs::write(&path, self.render())?;

        info!("Wrote {} objects to {}", self.objects.len(), path.display());
        Ok(path)
    }
}
