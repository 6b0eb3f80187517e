use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, macros::date};

use budget_dashboard::{
    NewTransaction, add_account, add_budget, add_net_worth_entry, add_transaction,
    initialize_db, update_balance,
};

/// A utility for creating a demo database for budget_dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const FIRST_DATE: Date = date!(2024 - 01 - 31);
const SECOND_DATE: Date = date!(2024 - 02 - 29);

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating accounts...");
    let checking = add_account("Everyday", "Kiwi Bank", "Checking", &conn)?;
    let savings = add_account("Rainy Day", "Kiwi Bank", "Savings", &conn)?;
    let visa = add_account("Visa", "Big Bank", "Credit Card", &conn)?;
    let shares = add_account("Index Fund", "Broker Co", "Investment", &conn)?;

    println!("Recording balances...");
    for (account_id, first, second) in [
        (checking.id, 2_450.00, 2_810.50),
        (savings.id, 8_000.00, 8_250.00),
        (visa.id, -640.25, -385.10),
        (shares.id, 12_300.00, 12_915.75),
    ] {
        update_balance(account_id, FIRST_DATE, first, &conn)?;
        update_balance(account_id, SECOND_DATE, second, &conn)?;
    }

    println!("Creating transactions...");
    let transactions = [
        (checking.id, date!(2024 - 02 - 01), 3_200.00, "Salary", "February pay"),
        (checking.id, date!(2024 - 02 - 02), -1_450.00, "Rent", ""),
        (visa.id, date!(2024 - 02 - 05), -132.87, "Groceries", "Weekly shop"),
        (visa.id, date!(2024 - 02 - 12), -118.40, "Groceries", "Weekly shop"),
        (visa.id, date!(2024 - 02 - 14), -86.00, "Dining", "Dinner out"),
        (checking.id, date!(2024 - 02 - 20), -210.35, "Utilities", "Power and internet"),
        (savings.id, date!(2024 - 02 - 28), 250.00, "Transfer", "Monthly savings"),
    ];
    for (account_id, date, amount, category, description) in transactions {
        add_transaction(
            NewTransaction {
                account_id,
                date,
                amount,
                category: category.to_owned(),
                description: (!description.is_empty()).then(|| description.to_owned()),
            },
            &conn,
        )?;
    }

    println!("Creating budgets...");
    for (category, amount) in [
        ("Groceries", 600.00),
        ("Dining", 150.00),
        ("Utilities", 250.00),
        ("Rent", 1_450.00),
    ] {
        add_budget(category, amount, &conn)?;
    }

    println!("Recording net worth snapshots...");
    add_net_worth_entry(FIRST_DATE, &conn)?;
    add_net_worth_entry(SECOND_DATE, &conn)?;

    println!("Success!");

    Ok(())
}
