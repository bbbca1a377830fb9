//! Search notes tool.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolContext, ToolDefinition, require_non_blank};
use crate::domains::tools::envelope::OperationPayload;
use crate::domains::tools::error::ToolError;

/// Parameters for the search notes tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNotesParams {
    #[schemars(description = "คำค้นหา / Search query")]
    pub query: String,
}

/// Search notes tool.
///
/// Matches the query case-insensitively as a substring of the title, the
/// content, or any tag. Results keep creation order.
pub struct SearchNotesTool;

impl ToolDefinition for SearchNotesTool {
    const NAME: &'static str = "search_notes";
    const DESCRIPTION: &'static str = "ค้นหาโน้ต / Search notes";

    type Params = SearchNotesParams;

    #[instrument(skip_all, fields(query = %params.query))]
    fn execute(params: SearchNotesParams, ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        require_non_blank("query", &params.query)?;

        let needle = params.query.to_lowercase();
        let notes = ctx.stores.notes.filter(|n| n.matches(&needle));

        info!("Found {} note(s) matching '{}'", notes.len(), params.query);
        Ok(OperationPayload::note_search(notes))
    }
}
