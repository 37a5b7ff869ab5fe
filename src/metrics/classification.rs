//! Confusion-matrix construction for classification results.
//!
//! This module builds and normalizes the confusion matrix that an external
//! plotting layer renders; the rendering itself lives outside this crate.
//! [`MatrixDisplayConfig`] carries the display options (title,
//! normalization, colormap, class names) as an explicit value instead of
//! module-level defaults.

use crate::core::{
    error::{RankEvalError, Result},
    types::Label,
};
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Confusion matrix over the distinct labels of a prediction run.
///
/// Rows are true classes, columns predicted classes, both ordered by the
/// sorted set of distinct labels observed in either input sequence.
/// `matrix[[i, j]]` counts samples whose true label is `labels()[i]` and
/// predicted label is `labels()[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    matrix: Array2<usize>,
    labels: Vec<Label>,
}

impl ConfusionMatrix {
    /// Build a confusion matrix from parallel true and predicted labels.
    ///
    /// # Errors
    ///
    /// Returns [`RankEvalError::DimensionMismatch`] if the sequences have
    /// different lengths and [`RankEvalError::InvalidParameter`] if they
    /// are empty.
    pub fn from_labels(
        y_true: &ArrayView1<'_, Label>,
        y_pred: &ArrayView1<'_, Label>,
    ) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(RankEvalError::dimension_mismatch(
                format!("y_true: {}", y_true.len()),
                format!("y_pred: {}", y_pred.len()),
            ));
        }
        if y_true.is_empty() {
            return Err(RankEvalError::invalid_parameter(
                "y_true",
                "[]",
                "confusion matrix requires at least one sample",
            ));
        }

        let mut labels: Vec<Label> = y_true.iter().chain(y_pred.iter()).copied().collect();
        labels.sort_unstable();
        labels.dedup();

        let n = labels.len();
        let mut matrix = Array2::zeros((n, n));
        for (&actual, &predicted) in y_true.iter().zip(y_pred.iter()) {
            // Both labels are members of the deduplicated set
            let i = labels.binary_search(&actual).map_err(|_| {
                RankEvalError::internal("observed label missing from label axis")
            })?;
            let j = labels.binary_search(&predicted).map_err(|_| {
                RankEvalError::internal("observed label missing from label axis")
            })?;
            matrix[[i, j]] += 1;
        }

        Ok(Self { matrix, labels })
    }

    /// Raw count matrix.
    pub fn matrix(&self) -> &Array2<usize> {
        &self.matrix
    }

    /// Sorted distinct labels forming both axes.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of classes on each axis.
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    /// Count for a specific (actual, predicted) class-index pair.
    pub fn get(&self, actual: usize, predicted: usize) -> usize {
        self.matrix[[actual, predicted]]
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.matrix.iter().sum()
    }

    /// Number of samples whose true label is the class at `index`.
    pub fn support(&self, index: usize) -> usize {
        self.matrix.row(index).iter().sum()
    }

    /// Row-normalized matrix: each entry divided by its true-class total.
    ///
    /// A class observed only as a prediction has an all-zero row; its
    /// normalized row stays zero instead of turning into NaN.
    pub fn normalized(&self) -> Array2<f64> {
        let mut normalized = self.matrix.mapv(|count| count as f64);
        for mut row in normalized.rows_mut() {
            let row_sum: f64 = row.iter().sum();
            if row_sum > 0.0 {
                row.mapv_inplace(|count| count / row_sum);
            }
        }
        normalized
    }
}

/// Sequential colormap name understood by the plotting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    /// White-to-blue ramp
    Blues,
    /// White-to-green ramp
    Greens,
    /// White-to-grey ramp
    Greys,
    /// White-to-orange ramp
    Oranges,
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::Blues
    }
}

/// Display options handed to the plotting layer along with a computed
/// [`ConfusionMatrix`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDisplayConfig {
    /// Plot title; `None` derives a title from the `normalize` flag.
    pub title: Option<String>,
    /// Whether the rendered matrix shows row-normalized values.
    pub normalize: bool,
    /// Colormap for the cell shading.
    pub colormap: Colormap,
    /// Human-readable class names, one per matrix axis entry.
    pub class_names: Option<Vec<String>>,
}

impl MatrixDisplayConfig {
    /// Create a configuration with the default display options.
    pub fn new() -> Self {
        Self {
            title: None,
            normalize: false,
            colormap: Colormap::default(),
            class_names: None,
        }
    }

    /// Set an explicit plot title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set whether the rendered matrix is row-normalized.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the colormap.
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Set the human-readable class names.
    pub fn with_class_names(mut self, class_names: Vec<String>) -> Self {
        self.class_names = Some(class_names);
        self
    }

    /// Title to render, deriving the conventional default when unset.
    pub fn resolved_title(&self) -> &str {
        match self.title {
            Some(ref title) => title,
            None if self.normalize => "Normalized confusion matrix",
            None => "Confusion matrix, without normalization",
        }
    }
}

impl Default for MatrixDisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
