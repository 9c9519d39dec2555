// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for chart rendering

use std::path::{Path, PathBuf};

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("no usable font found; searched: {}", join_paths(.searched))]
    FontUnavailable { searched: Vec<PathBuf> },

    #[error("not a usable TrueType font: {0}")]
    InvalidFont(PathBuf),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(err.to_string())
    }
}

impl ChartError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ChartError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type ChartResult<T> = Result<T, ChartError>;
