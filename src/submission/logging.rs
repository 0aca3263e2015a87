//! Submission handler that only records the registration

use super::traits::{SubmissionError, SubmissionHandler, SubmissionReceipt};
use crate::validation::{self, FormValues, RevenueBucket};
use async_trait::async_trait;

/// Logs each registration (passwords redacted) and issues a receipt
#[derive(Debug, Default)]
pub struct LoggingSubmissionHandler {
    submitted: usize,
}

impl LoggingSubmissionHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionHandler for LoggingSubmissionHandler {
    async fn submit(&mut self, values: FormValues) -> Result<SubmissionReceipt, SubmissionError> {
        // Never trust the caller to have validated.
        let errors = validation::validate(&values);
        if !errors.is_valid() {
            tracing::warn!(errors = errors.len(), "rejected invalid registration");
            return Err(SubmissionError::Rejected {
                errors: errors.len(),
            });
        }

        let revenue: RevenueBucket = values.revenue.parse()?;
        let payload = serde_json::to_string(&values.redacted())?;
        let receipt = SubmissionReceipt::new(&values.store_name);
        self.submitted += 1;
        tracing::info!(
            submission_id = %receipt.id,
            revenue = ?revenue,
            total = self.submitted,
            payload = %payload,
            "registration submitted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo_values() -> FormValues {
        FormValues {
            email: "demo@company.com".to_string(),
            company_name: "Demo Inc.".to_string(),
            website: "http://example.com".to_string(),
            revenue: "1M-10M".to_string(),
            store_name: "My Store".to_string(),
            description: "A shop.".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_registration_gets_receipt() {
        let mut handler = LoggingSubmissionHandler::new();
        let receipt = handler.submit(demo_values()).await.unwrap();
        assert_eq!(receipt.store_name, "My Store");
        assert_eq!(handler.submitted, 1);
    }

    #[tokio::test]
    async fn test_invalid_registration_is_rejected() {
        let mut handler = LoggingSubmissionHandler::new();
        let values = FormValues {
            confirm_password: "xyz456".to_string(),
            ..demo_values()
        };
        let err = handler.submit(values).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected { errors: 1 }));
        assert_eq!(handler.submitted, 0);
    }

    #[test]
    fn test_empty_registration_is_rejected() {
        let mut handler = LoggingSubmissionHandler::new();
        let result = tokio_test::block_on(handler.submit(FormValues::default()));
        assert!(result.is_err());
    }
}
