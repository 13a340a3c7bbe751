//! Dump the ASCII reference table as JSON
//!
//! Run with: cargo run --example table > ascii.json

#[cfg(feature = "serde")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = ctype::ReferenceTable::build();
    println!("{}", table.to_json()?);

    for category in ctype::Category::ALL {
        eprintln!("{category:>10}: {}", table.rows_in(category).count());
    }

    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() {
    eprintln!("This example requires the 'serde' feature to be enabled.");
    eprintln!("Run with: cargo run --features serde --example table");
    std::process::exit(1);
}
