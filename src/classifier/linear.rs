// WHY: Classifier half of the pre-trained artifact: a fitted linear model over TF-IDF rows

use serde::{Deserialize, Serialize};

use super::label::RiskLabel;
use super::tfidf::SparseRow;

/// Fitted linear classifier (one weight row per class, or one row for a binary model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Class labels in column order of the decision scores
    pub classes: Vec<RiskLabel>,
    /// Weight rows, each as wide as the vectorizer vocabulary
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearClassifier {
    /// Raw decision scores for one feature row
    pub fn decision_function(&self, row: &SparseRow) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, bias)| {
                row.iter()
                    .map(|(column, value)| weights.get(*column).map_or(0.0, |w| w * value))
                    .sum::<f64>()
                    + bias
            })
            .collect()
    }

    /// Predicted class for one feature row, or None for a model with no scores
    /// WHY: binary models store a single row whose sign picks the second class;
    /// otherwise the first maximal score wins, matching argmax tie-breaking
    pub fn predict_row(&self, row: &SparseRow) -> Option<RiskLabel> {
        let scores = self.decision_function(row);
        if self.coef.len() == 1 && self.classes.len() == 2 {
            let positive = *scores.first()? > 0.0;
            return self.classes.get(usize::from(positive)).copied();
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, &score) in scores.iter().enumerate() {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best.and_then(|(index, _)| self.classes.get(index).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiclass_argmax() {
        let clf = LinearClassifier {
            classes: vec![RiskLabel::NEUTRAL, RiskLabel::MILD, RiskLabel::MODERATE],
            coef: vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 2.0]],
            intercept: vec![0.5, 0.0, 0.0],
        };
        assert_eq!(clf.predict_row(&vec![]), Some(RiskLabel::NEUTRAL));
        assert_eq!(clf.predict_row(&vec![(0, 1.0)]), Some(RiskLabel::MILD));
        assert_eq!(clf.predict_row(&vec![(0, 1.0), (1, 1.0)]), Some(RiskLabel::MODERATE));
    }

    #[test]
    fn test_ties_resolve_to_first_class() {
        let clf = LinearClassifier {
            classes: vec![RiskLabel::MODERATE, RiskLabel::HIGH],
            coef: vec![vec![1.0], vec![1.0]],
            intercept: vec![0.0, 0.0],
        };
        assert_eq!(clf.predict_row(&vec![(0, 1.0)]), Some(RiskLabel::MODERATE));
    }

    #[test]
    fn test_binary_sign() {
        let clf = LinearClassifier {
            classes: vec![RiskLabel::NEUTRAL, RiskLabel::HIGH],
            coef: vec![vec![2.0]],
            intercept: vec![-1.0],
        };
        assert_eq!(clf.predict_row(&vec![]), Some(RiskLabel::NEUTRAL));
        assert_eq!(clf.predict_row(&vec![(0, 1.0)]), Some(RiskLabel::HIGH));
    }

    #[test]
    fn test_unvalidated_shapes_do_not_panic() {
        let empty = LinearClassifier { classes: vec![], coef: vec![], intercept: vec![] };
        assert_eq!(empty.predict_row(&vec![]), None);

        let narrow = LinearClassifier {
            classes: vec![RiskLabel::NEUTRAL, RiskLabel::MILD, RiskLabel::HIGH],
            coef: vec![vec![0.0], vec![1.0]],
            intercept: vec![0.0, 0.0],
        };
        assert_eq!(narrow.decision_function(&vec![(0, 1.0), (7, 5.0)]), vec![0.0, 1.0]);
        assert_eq!(narrow.predict_row(&vec![(0, 1.0)]), Some(RiskLabel::MILD));
    }
}
