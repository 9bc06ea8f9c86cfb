use crate::core::exchange::ExchangeService;
use crate::core::history::HistoryEntry;
use anyhow::Result;

/// Renders history entries one per line, oldest first.
pub fn display(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "Exchange history:\nNo exchanges recorded yet.".to_string();
    }
    let mut output = String::from("Exchange history:");
    for entry in entries {
        output.push('\n');
        output.push_str(&entry.to_string());
    }
    output
}

pub fn run(service: &ExchangeService) -> Result<()> {
    let entries = service.list_history()?;
    println!("{}", display(&entries));
    Ok(())
}
