use std::sync::Arc;

use colored::Colorize;
use relay_chain::{DispatchOutcome, EscalationChain};
use relay_store::{DocumentStore, DocumentStoreProxy, InMemoryDocumentStore, ProxyStats};
use relay_types::{Document, DocumentId, Priority, SupportRequest};
use serde::Serialize;

use crate::cli::*;
use crate::config::RelayConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = RelayConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Demo => cmd_demo(&config, cli.format),
        Command::Escalate(args) => cmd_escalate(&config, args, cli.format),
        Command::Documents(args) => cmd_documents(&config, &args.query, cli.format),
    }
}

fn cmd_demo(config: &RelayConfig, format: OutputFormat) -> anyhow::Result<()> {
    let chain = EscalationChain::with_default_handlers(config.chain.clone());
    let outcomes = escalate_all(&chain, &sample_requests())?;
    let report = document_walkthrough(config, "Document")?;

    match format {
        OutputFormat::Json => {
            let combined = serde_json::json!({
                "escalation": outcomes,
                "documents": report,
            });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
        OutputFormat::Text => {
            println!("{}", "Escalation chain".bold());
            for line in escalation_lines(&outcomes) {
                println!("  {line}");
            }
            println!();
            println!("{}", "Document proxy".bold());
            for line in report.lines() {
                println!("  {line}");
            }
        }
    }
    Ok(())
}

fn cmd_escalate(
    config: &RelayConfig,
    args: EscalateArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let chain = EscalationChain::with_default_handlers(config.chain.clone());
    let request = SupportRequest::new(args.id, args.description, args.priority);
    let outcome = chain.dispatch(&request)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => {
            for line in escalation_lines(std::slice::from_ref(&outcome)) {
                println!("{} {line}", "✓".green().bold());
            }
        }
    }
    Ok(())
}

fn cmd_documents(config: &RelayConfig, query: &str, format: OutputFormat) -> anyhow::Result<()> {
    let report = document_walkthrough(config, query)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for line in report.lines() {
                println!("{line}");
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Escalation walkthrough
// ---------------------------------------------------------------------------

/// One request per tier, in the order the chain is wired.
fn sample_requests() -> Vec<SupportRequest> {
    vec![
        SupportRequest::new(1, "Hardware issue", Priority::Low),
        SupportRequest::new(2, "Software issue", Priority::Medium),
        SupportRequest::new(3, "Network issue", Priority::High),
    ]
}

fn escalate_all(
    chain: &EscalationChain,
    requests: &[SupportRequest],
) -> anyhow::Result<Vec<DispatchOutcome>> {
    let mut outcomes = Vec::with_capacity(requests.len());
    for request in requests {
        outcomes.push(chain.dispatch(request)?);
    }
    Ok(outcomes)
}

/// Narration for resolved requests; dropped requests print nothing.
fn escalation_lines(outcomes: &[DispatchOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter_map(|o| o.resolution.as_ref())
        .map(ToString::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Document walkthrough
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct DocumentReport {
    downloaded: Option<Document>,
    edited: bool,
    query: String,
    results: Vec<Document>,
    proxy_calls: ProxyStats,
}

impl DocumentReport {
    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.results.len() + 2);
        match &self.downloaded {
            Some(doc) => lines.push(format!("Downloaded Document: {doc}")),
            None => lines.push("Document not found.".to_string()),
        }
        lines.push(format!("Search results for query '{}':", self.query));
        lines.extend(self.results.iter().map(ToString::to_string));
        lines
    }
}

fn document_walkthrough(config: &RelayConfig, query: &str) -> anyhow::Result<DocumentReport> {
    let real = Arc::new(InMemoryDocumentStore::with_config(config.store.clone()));
    let proxy = DocumentStoreProxy::new(Arc::clone(&real));

    let document = Document::new(1, "Document 1", "This is the content of Document 1")
        .with_metadata("author", "John Doe");
    proxy.upload(document)?;

    let downloaded = proxy.download(DocumentId(1))?;
    let edited = proxy.edit(DocumentId(1), "This is the edited content of Document 1")?;
    let results = proxy.search(query)?;

    tracing::debug!(stored = real.len(), "document walkthrough finished");
    Ok(DocumentReport {
        downloaded,
        edited,
        query: query.to_string(),
        results,
        proxy_calls: proxy.stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_chain::ChainConfig;

    #[test]
    fn escalation_narration_matches_tiers() {
        let chain = EscalationChain::with_default_handlers(ChainConfig::default());
        let outcomes = escalate_all(&chain, &sample_requests()).unwrap();
        assert_eq!(
            escalation_lines(&outcomes),
            vec![
                "Hardware team handles support request: 1",
                "Software team handles support request: 2",
                "Network team handles support request: 3",
            ]
        );
    }

    #[test]
    fn dropped_request_prints_nothing() {
        let chain = EscalationChain::new(ChainConfig::default());
        let outcomes = escalate_all(&chain, &sample_requests()).unwrap();
        assert!(escalation_lines(&outcomes).is_empty());
    }

    #[test]
    fn strict_chain_surfaces_drop_as_error() {
        let chain = EscalationChain::new(ChainConfig::strict());
        assert!(escalate_all(&chain, &sample_requests()).is_err());
    }

    #[test]
    fn document_walkthrough_narration() {
        let report = document_walkthrough(&RelayConfig::default(), "Document").unwrap();
        assert!(report.edited);
        assert_eq!(report.results.len(), 1);
        assert_eq!(
            report.results[0].content,
            "This is the edited content of Document 1"
        );
        assert_eq!(report.proxy_calls.total(), 4);

        let lines = report.lines();
        assert_eq!(
            lines[0],
            r#"Downloaded Document: Document(id: 1, title: "Document 1", content: "This is the content of Document 1", metadata: {"author": "John Doe"})"#
        );
        assert_eq!(lines[1], "Search results for query 'Document':");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn document_walkthrough_without_matches() {
        let report = document_walkthrough(&RelayConfig::default(), "missing").unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.lines().len(), 2);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = document_walkthrough(&RelayConfig::default(), "edited").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["query"], "edited");
        assert_eq!(json["results"][0]["id"], 1);
        assert_eq!(json["proxy_calls"]["searches"], 1);
    }
}
