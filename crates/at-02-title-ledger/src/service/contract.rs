//! # Title Ledger API Implementation

use super::cursor::CursorGuard;
use super::TitleLedgerService;
use crate::domain::{
    decode_title, encode_title, AcademicTitle, IntegrityReport, TitleDraft, TitleError,
    TitleSelector,
};
use crate::ports::inbound::TitleLedgerApi;
use crate::ports::outbound::LedgerState;
use at_01_identity_gate::ClientIdentity;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

impl<L: LedgerState> TitleLedgerService<L> {
    /// Read and decode the record under `title_id`.
    fn read_title(&self, title_id: &str) -> Result<AcademicTitle, TitleError> {
        let bytes = self.ledger.get_state(title_id).map_err(|e| {
            warn!(title_id, error = %e, "Ledger read failed");
            TitleError::Storage(e)
        })?;
        decode_title(&bytes)
    }
}

impl<L: LedgerState> TitleLedgerApi for TitleLedgerService<L> {
    fn issue_title(
        &self,
        caller: &dyn ClientIdentity,
        draft: TitleDraft,
    ) -> Result<(), TitleError> {
        let span = info_span!("issue_title", tx_id = %Uuid::new_v4(), title_id = %draft.title_id);
        let _enter = span.enter();

        let issuer = self.gate.authorize_issuer(caller)?;

        let title = AcademicTitle::issue(draft);
        let bytes = encode_title(&title)?;

        // Re-issuing an existing id overwrites the stored record.
        self.ledger.put_state(&title.title_id, &bytes).map_err(|e| {
            warn!(error = %e, "Ledger write failed");
            TitleError::Storage(e)
        })?;

        info!(
            org_id = %issuer,
            student_id = %title.student_id,
            "Title issued"
        );
        Ok(())
    }

    fn verify_title(&self, title_id: &str) -> Result<AcademicTitle, TitleError> {
        let span = info_span!("verify_title", tx_id = %Uuid::new_v4(), title_id);
        let _enter = span.enter();

        let title = self.read_title(title_id)?;
        debug!(student_id = %title.student_id, "Title read");
        Ok(title)
    }

    fn transfer(&self, title_id: &str, new_owner: &str) -> Result<(), TitleError> {
        warn!(title_id, new_owner, "Rejected transfer of soulbound title");
        Err(TitleError::TransferNotPermitted)
    }

    fn get_titles_by_student(&self, student_id: &str) -> Result<Vec<AcademicTitle>, TitleError> {
        let span = info_span!("get_titles_by_student", tx_id = %Uuid::new_v4(), student_id);
        let _enter = span.enter();

        let query = TitleSelector::by_student(student_id).to_query_string()?;
        let cursor = self.ledger.get_query_result(&query).map_err(|e| {
            warn!(error = %e, "Query could not be started");
            TitleError::Query(e)
        })?;
        let mut cursor = CursorGuard::new(cursor);

        let limit = self.config.max_query_results;
        let mut titles = Vec::new();
        while cursor.has_next() {
            if titles.len() >= limit {
                return Err(TitleError::Iteration(format!("result set exceeds {} rows", limit)));
            }
            let bytes = cursor.next().map_err(|e| TitleError::Iteration(e.to_string()))?;
            titles.push(decode_title(&bytes)?);
        }

        debug!(rows = titles.len(), "Student query complete");
        Ok(titles)
    }

    fn check_integrity(&self, title_id: &str) -> Result<IntegrityReport, TitleError> {
        let span = info_span!("check_integrity", tx_id = %Uuid::new_v4(), title_id);
        let _enter = span.enter();

        let report = IntegrityReport::for_title(self.read_title(title_id)?);
        if !report.is_valid {
            warn!("Stored validation hash does not match title fields");
        }
        Ok(report)
    }
}
