use std::path::Path;

use crate::{ModelError, N_FEATURES, artifact::read_json};

/// Pre-trained categorical model over scaled features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StressModel {
    Linear(LinearModel),
    Tree(DecisionTree),
}

impl StressModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let model: Self = read_json(path.as_ref())?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            StressModel::Linear(model) => model.validate(),
            StressModel::Tree(tree) => tree.validate(),
        }
    }

    pub fn n_classes(&self) -> usize {
        match self {
            StressModel::Linear(model) => model.intercepts.len(),
            StressModel::Tree(tree) => tree.n_classes(),
        }
    }

    /// Index of the predicted class. Only sound after `validate` succeeded.
    pub(crate) fn predict(&self, x: &[f64; N_FEATURES]) -> usize {
        match self {
            StressModel::Linear(model) => model.predict(x),
            StressModel::Tree(tree) => tree.predict(x),
        }
    }
}

/// One weight row and intercept per class; prediction is the highest score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearModel {
    fn validate(&self) -> Result<(), ModelError> {
        if self.intercepts.is_empty() {
            return Err(ModelError::EmptyModel);
        }

        if self.coefficients.len() != self.intercepts.len() {
            return Err(ModelError::RowCountMismatch {
                coefficients: self.coefficients.len(),
                intercepts: self.intercepts.len(),
            });
        }

        if let Some(row) = self.coefficients.iter().find(|row| row.len() != N_FEATURES) {
            return Err(ModelError::FeatureMismatch {
                artifact: "linear model",
                expected: N_FEATURES,
                found: row.len(),
            });
        }

        Ok(())
    }

    pub fn decision_function(&self, x: &[f64; N_FEATURES]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| row.iter().zip(x).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect()
    }

    fn predict(&self, x: &[f64; N_FEATURES]) -> usize {
        argmax(&self.decision_function(x))
    }
}

/// Flattened binary tree, nodes in preorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub feature: usize,
    #[serde(default)]
    pub threshold: f64,
    pub left: i64,
    pub right: i64,
    /// Per-class weights. Only read on leaves.
    pub value: Vec<f64>,
}

impl TreeNode {
    pub const LEAF: i64 = -1;

    pub fn is_leaf(&self) -> bool {
        self.left == Self::LEAF && self.right == Self::LEAF
    }
}

impl DecisionTree {
    fn n_classes(&self) -> usize {
        self.nodes.first().map(|n| n.value.len()).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ModelError> {
        let n_classes = self.n_classes();
        if n_classes == 0 {
            return Err(ModelError::EmptyModel);
        }

        let len = self.nodes.len() as i64;
        for (i, node) in self.nodes.iter().enumerate() {
            if node.value.len() != n_classes {
                return Err(ModelError::InvalidNode(i));
            }

            if node.is_leaf() {
                continue;
            }

            // Children strictly after the parent keeps traversal finite.
            let forward = |child: i64| child > i as i64 && child < len;
            if node.feature >= N_FEATURES || !forward(node.left) || !forward(node.right) {
                return Err(ModelError::InvalidNode(i));
            }
        }

        Ok(())
    }

    fn predict(&self, x: &[f64; N_FEATURES]) -> usize {
        let mut idx = 0;
        loop {
            let node = &self.nodes[idx];
            if node.is_leaf() {
                return argmax(&node.value);
            }

            let next = if x[node.feature] <= node.threshold {
                node.left
            } else {
                node.right
            };
            idx = next as usize;
        }
    }
}

/// First index of the maximum. NaN scores never win.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] || (values[best].is_nan() && !v.is_nan()) {
            best = i;
        }
    }
    best
}
