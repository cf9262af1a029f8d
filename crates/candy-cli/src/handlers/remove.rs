//! Remove command handler.
//!
//! Deletes the record and, unless it is the shared placeholder, its image file.

use anyhow::Result;
use candy_core::Candy;

use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext, id: i64) -> Result<Option<Candy>> {
    match ctx.candies.delete(id).await {
        Ok(candy) => {
            println!("Removed candy #{}: {}", candy.id, candy.name);
            Ok(Some(candy))
        }
        Err(e) if e.is_not_found() => {
            println!("No candy found with ID {id}.");
            println!("Use 'candy list' to see available candies.");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
