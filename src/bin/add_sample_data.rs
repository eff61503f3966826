//! Populate the database with sample catalog data.
//!
//! Inserts two categories and four products. Running it twice inserts
//! duplicate rows; it is a bootstrap helper, not a sync tool.

use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use std::str::FromStr;
use uuid::Uuid;

struct SampleProduct {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    stock: i32,
}

const ELECTRONICS: &[SampleProduct] = &[
    SampleProduct {
        name: "Smartphone",
        description: "Latest model smartphone with advanced features",
        price: "699.99",
        stock: 50,
    },
    SampleProduct {
        name: "Laptop",
        description: "High-performance laptop for professional use",
        price: "1299.99",
        stock: 30,
    },
];

const CLOTHING: &[SampleProduct] = &[
    SampleProduct {
        name: "T-Shirt",
        description: "Comfortable cotton t-shirt",
        price: "19.99",
        stock: 100,
    },
    SampleProduct {
        name: "Jeans",
        description: "Classic blue jeans",
        price: "49.99",
        stock: 75,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let electronics_id = create_category(
        &pool,
        "Electronics",
        "Electronic devices and gadgets",
    )
    .await?;
    let clothing_id = create_category(&pool, "Clothing", "Fashion and apparel").await?;

    for product in ELECTRONICS {
        create_product(&pool, electronics_id, product).await?;
    }
    for product in CLOTHING {
        create_product(&pool, clothing_id, product).await?;
    }

    println!("Successfully added sample data");

    Ok(())
}

async fn create_category(
    pool: &sqlx::PgPool,
    name: &str,
    description: &str,
) -> anyhow::Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn create_product(
    pool: &sqlx::PgPool,
    category_id: Uuid,
    product: &SampleProduct,
) -> anyhow::Result<()> {
    let price = Decimal::from_str(product.price)?;

    sqlx::query(
        r#"
        INSERT INTO products (category_id, name, description, price, stock)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(category_id)
    .bind(product.name)
    .bind(product.description)
    .bind(price)
    .bind(product.stock)
    .execute(pool)
    .await?;

    Ok(())
}
