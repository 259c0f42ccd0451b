//! Seeds demo data: users, two tax profiles per user, three invoices per
//! profile and three line items per invoice.
//!
//! Usage: `cargo run --bin seed -- --users 5`

use anyhow::{Context, Result};
use clap::Parser;
use uuid::Uuid;

use invoicing_api::{config, db};

#[derive(Parser, Debug)]
#[command(about = "Seed the invoicing database with demo data")]
struct Args {
    /// Number of demo users to create
    #[arg(long, default_value_t = 5)]
    users: u32,
}

/// Integer cents formatted as a decimal string, bound with ::numeric.
fn cents(value: i64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = db::connect(&database_url).await.context("database connection failed")?;
    sqlx::migrate!().run(&pool).await.context("migrations failed")?;

    let run_id = chrono::Utc::now().timestamp();
    let bcrypt_cost = config::config().security.bcrypt_cost;

    println!("Seeding {} users...", args.users);

    for i in 1..=args.users {
        let email = format!("user{}-{}@example.com", i, run_id);
        let password_hash = bcrypt::hash(format!("password{}", i), bcrypt_cost)?;

        let user_id: Uuid = sqlx::query_scalar(
            "INSERT INTO users (email, password, first_name, last_name) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(format!("First{}", i))
        .bind(format!("Last{}", i))
        .fetch_one(&pool)
        .await?;

        for j in 1..=2u32 {
            let profile_id: Uuid = sqlx::query_scalar(
                "INSERT INTO tax_profiles (name, tax_id, address, city, postal_code, user_id) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
            )
            .bind(format!("First{} Last{} SRL {}", i, i, j))
            .bind(format!("IT{:011}", i as i64 * 100_000 + j as i64))
            .bind(format!("Via Roma {}", j))
            .bind("Roma")
            .bind("00100")
            .bind(user_id)
            .fetch_one(&pool)
            .await?;

            for k in 1..=3u32 {
                let subtotal = 10_000 + (i * 1_000 + j * 100 + k * 10) as i64;
                let tax_amount = subtotal * 22 / 100;
                let total = subtotal + tax_amount;

                let invoice_id: Uuid = sqlx::query_scalar(
                    "INSERT INTO invoices \
                     (number, status, issue_date, due_date, subtotal, tax_amount, total, description, tax_profile_id) \
                     VALUES ($1, 'DRAFT', now(), now() + interval '7 days', \
                             $2::numeric, $3::numeric, $4::numeric, $5, $6) RETURNING id",
                )
                .bind(format!("INV-{}-{}", &profile_id.to_string()[..4], k))
                .bind(cents(subtotal))
                .bind(cents(tax_amount))
                .bind(cents(total))
                .bind(format!("Invoice {} for profile {}", k, j))
                .bind(profile_id)
                .fetch_one(&pool)
                .await?;

                for l in 1..=3u32 {
                    let quantity = (k + l) as i64;
                    let unit_price = 1_000 + (l * 250) as i64;
                    let line_total = quantity * unit_price;

                    sqlx::query(
                        "INSERT INTO invoice_items (description, quantity, unit_price, line_total, invoice_id) \
                         VALUES ($1, $2::numeric, $3::numeric, $4::numeric, $5)",
                    )
                    .bind(format!("Item {} for invoice {}", l, k))
                    .bind(quantity.to_string())
                    .bind(cents(unit_price))
                    .bind(cents(line_total))
                    .bind(invoice_id)
                    .execute(&pool)
                    .await?;
                }
            }
        }

        println!("  {} (password: password{})", email, i);
    }

    println!("Done.");
    Ok(())
}
