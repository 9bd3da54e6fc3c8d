//! In-process classifier backed by a naive Bayes model trained at start-up.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::diagnosis::{
    ClassificationResult, FeatureVector, NaiveBayesModel, ReferenceData, SymptomSchema,
};
use crate::domain::symptoms::SymptomSet;
use crate::ports::{ClassifierError, ClassifierHealth, DiseaseClassifier};

/// Local classifier. Holds no model when the reference data was empty.
#[derive(Debug, Clone)]
pub struct LocalClassifier {
    schema: SymptomSchema,
    model: Option<NaiveBayesModel>,
}

impl LocalClassifier {
    /// Trains on the reference rows.
    pub fn train(reference: &ReferenceData) -> Self {
        let schema = reference.schema().clone();
        let model = NaiveBayesModel::fit(reference.rows(), schema.len());

        match &model {
            Some(model) => info!(
                classes = model.classes().len(),
                features = model.feature_count(),
                rows = reference.rows().len(),
                "Trained local classifier"
            ),
            None => warn!("No training rows available, local classifier has no model"),
        }

        Self { schema, model }
    }

    /// A classifier with no model; every prediction fails.
    pub fn unloaded(schema: SymptomSchema) -> Self {
        Self {
            schema,
            model: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }
}

#[async_trait]
impl DiseaseClassifier for LocalClassifier {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn predict(&self, symptoms: &SymptomSet) -> Result<ClassificationResult, ClassifierError> {
        let model = self.model.as_ref().ok_or(ClassifierError::ModelUnavailable)?;
        let features = FeatureVector::from_symptoms(&self.schema, symptoms);
        Ok(model.predict(&features))
    }

    async fn health(&self) -> Result<ClassifierHealth, ClassifierError> {
        Ok(ClassifierHealth {
            ok: true,
            model_loaded: self.is_loaded(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnosis::LabelledRow;
    use crate::domain::symptoms::SymptomId;

    fn id(raw: &str) -> SymptomId {
        SymptomId::new(raw).unwrap()
    }

    fn reference() -> ReferenceData {
        let schema = SymptomSchema::new(vec![id("itching"), id("skin_rash"), id("headache")]);
        let row = |flags: [u8; 3], condition: &str| LabelledRow {
            features: FeatureVector::from_flags(flags.to_vec()),
            condition: condition.to_string(),
        };
        ReferenceData::new(
            schema,
            vec![
                row([1, 1, 0], "Fungal infection"),
                row([1, 0, 0], "Fungal infection"),
                row([0, 0, 1], "Migraine"),
            ],
        )
    }

    #[tokio::test]
    async fn predicts_with_trained_model() {
        let classifier = LocalClassifier::train(&reference());
        let symptoms: SymptomSet = [id("itching"), id("skin_rash")].into_iter().collect();

        let result = classifier.predict(&symptoms).await.unwrap();

        assert_eq!(result.condition(), "Fungal infection");
        assert!((0.0..=1.0).contains(&result.confidence()));
    }

    #[tokio::test]
    async fn unknown_symptoms_are_ignored() {
        let classifier = LocalClassifier::train(&reference());
        let symptoms: SymptomSet = [id("headache"), id("broken_arm")].into_iter().collect();

        let result = classifier.predict(&symptoms).await.unwrap();

        assert_eq!(result.condition(), "Migraine");
    }

    #[tokio::test]
    async fn empty_reference_means_model_unavailable() {
        let empty = ReferenceData::new(reference().schema().clone(), Vec::new());
        let classifier = LocalClassifier::train(&empty);

        let result = classifier.predict(&SymptomSet::new()).await;

        assert_eq!(result, Err(ClassifierError::ModelUnavailable));
        assert!(!classifier.health().await.unwrap().model_loaded);
    }

    #[tokio::test]
    async fn health_reports_loaded_model() {
        let classifier = LocalClassifier::train(&reference());
        let health = classifier.health().await.unwrap();
        assert!(health.ok && health.model_loaded);
    }
}
