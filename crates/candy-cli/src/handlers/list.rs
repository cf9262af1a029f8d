//! List command handler.

use anyhow::Result;
use candy_core::CandyFilter;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Print one page of the catalog as a table.
pub async fn execute(ctx: &CliContext, page: u32, kind: Option<&str>) -> Result<()> {
    let filter = CandyFilter::from_query(kind);
    let listing = ctx.candies.list(page, filter).await?;

    if listing.items.is_empty() {
        if listing.total == 0 {
            println!("No candies found.");
            println!("Use 'candy add <name>' to add your first candy.");
        } else {
            println!(
                "Page {} is empty ({} page(s) in total).",
                listing.current_page, listing.total_pages
            );
        }
        return Ok(());
    }

    println!(
        "{:<5} {:<25} {:<15} {:<40} Description",
        "ID", "Name", "Kind", "Image"
    );
    print_separator(110);

    for candy in &listing.items {
        println!(
            "{:<5} {:<25} {:<15} {:<40} {}",
            candy.id,
            truncate_string(&candy.name, 24),
            truncate_string(&candy.kind, 14),
            candy.image,
            truncate_string(&candy.description, 30),
        );
    }

    print_separator(110);
    println!(
        "Page {} of {} ({} candies)",
        listing.current_page, listing.total_pages, listing.total
    );
    Ok(())
}
