// ABOUTME: Builds the chat instruction used in real mode to delegate ADR drafting.
// ABOUTME: Embeds the formatted NFR and context blocks plus the three fixed deliverables.

use crate::format::{context_block, nfr_block};
use crate::input::AdrInputs;

/// Construct the single user-role instruction sent to the chat-completion
/// endpoint. The response is used verbatim as the ADR body, so the prompt
/// enumerates the full expected document structure and a length constraint.
pub fn build_prompt(inputs: &AdrInputs) -> String {
    let dims = inputs
        .tradeoff_dimensions
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are the Architecture Copilot.\n\
         Context:\n\
         {nfrs}\n\
         \n\
         {context}\n\
         \n\
         Decision space: Application, Database, and Infrastructure Transformation.\n\
         \n\
         Tasks:\n\
         1) Propose 3 coherent transformation paths (App-first, DB-first, Infra-first). For each include: pros, cons, risks.\n\
         2) Provide a trade-off matrix over: {dims} with 1-5 scores and short justifications.\n\
         3) Draft an ADR in Markdown with: Title, Status, Date, Context, Options, Decision (and when to choose each), Mermaid diagram, Rollout & Rollback, Fitness Functions, Review date.\n\
         Keep it under ~700 words.\n",
        nfrs = nfr_block(inputs),
        context = context_block(inputs),
        dims = dims,
    )
}
