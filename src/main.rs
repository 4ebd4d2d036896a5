use anyhow::Result;

use bookclub::{Catalog, ReadOutcome};

fn main() -> Result<()> {
    println!("📚 Book Club Catalog v{}", bookclub::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut catalog = Catalog::new();

    // 1. Register the club members
    let knots = Catalog::create_non_fiction("Knots and Splices", "rigging", "beginner", "3012");
    catalog.add_user("Alice Hargreaves", "alice@club.example", &[knots.clone()]);
    catalog.add_user("Bob Sawyer", "bob@club.example", &[]);
    catalog.add_user("Carol Kennicott", "carol@club.example", &[]);
    println!("\n👥 Registered {} member(s)", catalog.user_count());

    // 2. Record some reads
    let dune = Catalog::create_novel("Dune", "Frank Herbert", "1965");
    let emma = Catalog::create_novel("Emma", "Jane Austen", "1815");
    let bread = Catalog::create_non_fiction("Flour and Water", "bread baking", "intermediate", "2048");

    catalog.add_book_to_user(&dune, "alice@club.example", Some(4.0))?;
    catalog.add_book_to_user(&dune, "bob@club.example", Some(3.0))?;
    catalog.add_book_to_user(&dune, "carol@club.example", None)?;
    catalog.add_book_to_user(&emma, "bob@club.example", Some(2.0))?;
    catalog.add_book_to_user(&bread, "carol@club.example", Some(3.0))?;
    catalog.add_book_to_user(&knots, "bob@club.example", Some(1.0))?;

    // An enthusiastic but out-of-range rating: the read is kept, the
    // rating is dropped from the book's global list.
    match catalog.add_book_to_user(&emma, "alice@club.example", Some(5.0))? {
        ReadOutcome::Recorded => {}
        ReadOutcome::RatingRejected(value) => {
            println!("⚠️  Rating {} rejected: must be between 0 and 4", value);
        }
    }

    // An unknown member is a hard error, reported and skipped
    if let Err(e) = catalog.add_book_to_user(&dune, "mallory@club.example", Some(4.0)) {
        println!("⚠️  Skipped read: {}", e);
    }

    // 3. Show the catalog
    println!("\n📖 Catalog ({} book(s)):", catalog.book_count());
    catalog.print_catalog();

    println!("\n👥 Members:");
    catalog.print_users();

    // 4. Aggregate statistics
    println!("\n📊 Statistics:");
    match catalog.most_read_book() {
        Some(book) => println!("  Most read:      {}", book),
        None => println!("  Most read:      n/a"),
    }
    match catalog.highest_rated_book() {
        Some(book) => println!("  Highest rated:  {}", book),
        None => println!("  Highest rated:  n/a"),
    }
    match catalog.most_positive_user() {
        Some(user) => println!("  Most positive:  {}", user),
        None => println!("  Most positive:  n/a"),
    }

    // 5. JSON summary for external tooling
    let summary = catalog.summary();
    println!("\n🗒️  {}", summary.summary());
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
