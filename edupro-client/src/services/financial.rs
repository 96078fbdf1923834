//! Tuition tracking: monthly fees, payment proofs, summary

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::ListQuery;
use shared::models::{FeeStatus, FeeSummary, MonthlyFee, MonthlyFeeUpdate};

use crate::http::{FilePart, HttpClient, MultipartForm};
use crate::resource::Resource;
use crate::ClientResult;

pub const FEES_PATH: &str = "/financial/fees/";
pub const FEE_SUMMARY_PATH: &str = "/financial/fees/summary/";

/// Multipart field carrying the proof file
const PROOF_FIELD: &str = "payment_proof";

#[async_trait]
pub trait FinancialApi: HttpClient + Sized {
    fn fees(&self) -> Resource<'_, Self, MonthlyFee> {
        Resource::new(self, FEES_PATH)
    }

    /// Attach a payment proof to a fee
    async fn upload_fee_proof(&self, fee_id: i64, file: FilePart) -> ClientResult<MonthlyFee> {
        let path = format!("{FEES_PATH}{fee_id}/upload-proof/");
        let form = MultipartForm::new().file(PROOF_FIELD, file);
        self.post_multipart(&path, form).await
    }

    async fn fee_summary(&self) -> ClientResult<FeeSummary> {
        self.get(FEE_SUMMARY_PATH).await
    }

    /// Record a payment on the given date
    async fn mark_fee_paid(&self, fee_id: i64, payment_date: NaiveDate) -> ClientResult<MonthlyFee> {
        let update = MonthlyFeeUpdate {
            status: Some(FeeStatus::Paid),
            payment_date: Some(payment_date),
            ..Default::default()
        };
        self.fees().update(fee_id, &update).await
    }

    /// Fees of one student, optionally restricted to a status
    async fn student_fees(
        &self,
        student_id: i64,
        status: Option<FeeStatus>,
    ) -> ClientResult<Vec<MonthlyFee>> {
        let mut query = ListQuery::new().filter("student", student_id);
        if let Some(status) = status {
            query = query.filter("status", status);
        }
        self.fees().all(&query).await
    }
}

impl<C: HttpClient> FinancialApi for C {}
