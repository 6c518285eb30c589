//! Assistant CLI command

use crate::assistant;
use crate::error::SmartSaveResult;
use crate::storage::Storage;

use super::parse_category;

/// Answer a question about one category
pub fn handle_ask_command(storage: &Storage, category: &str, message: &[String]) -> SmartSaveResult<()> {
    let kind = parse_category(category)?;
    let ledger = storage.ledger.get()?;
    let cat = ledger.category(kind);

    let reply = assistant::respond(kind, &message.join(" "), cat.spent, cat.allocated);
    println!("{} {}", cat.icon, reply);
    Ok(())
}
