//! Demonstration records for a freshly started marketplace.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    CategoryId, CategoryRanking, IdentifierValidationError, Product, ProductCondition,
    ProductDraft, ProductId, ProductTransitionError, ProductValidationError, Rating, Review,
    ReviewDraft, ReviewId, ReviewValidationError, StampCard, StampCardId, User, UserId,
    UserProfile, UserValidationError,
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=300";

/// Failures building the sample records.
#[derive(Debug, thiserror::Error)]
pub enum SampleDataError {
    #[error("invalid sample date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error(transparent)]
    Identifier(#[from] IdentifierValidationError),
    #[error(transparent)]
    Product(#[from] ProductValidationError),
    #[error(transparent)]
    Transition(#[from] ProductTransitionError),
    #[error(transparent)]
    Review(#[from] ReviewValidationError),
    #[error(transparent)]
    User(#[from] UserValidationError),
}

/// Every sample record, ready to be written to the stores.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub reviews: Vec<Review>,
    pub stamp_cards: Vec<StampCard>,
    pub rankings: Vec<CategoryRanking>,
}

fn date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, SampleDataError> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or(SampleDataError::InvalidDate { year, month, day })
}

struct ProductSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: i64,
    condition: ProductCondition,
    seller: &'static str,
    category: &'static str,
    listed_on: u32,
    sold_on: Option<u32>,
}

const PRODUCTS: [ProductSeed; 4] = [
    ProductSeed {
        id: "1",
        title: "iPhone 14 Pro",
        description: "美品です。使用期間は1年程度。",
        price: 120_000,
        condition: ProductCondition::LikeNew,
        seller: "user1",
        category: "electronics",
        listed_on: 15,
        sold_on: None,
    },
    ProductSeed {
        id: "2",
        title: "ナイキ エアマックス",
        description: "サイズ27cm。数回着用のみ。",
        price: 8_500,
        condition: ProductCondition::Good,
        seller: "user2",
        category: "fashion",
        listed_on: 10,
        sold_on: None,
    },
    ProductSeed {
        id: "3",
        title: "MacBook Air M2",
        description: "2023年モデル。ほぼ未使用。",
        price: 150_000,
        condition: ProductCondition::New,
        seller: "user3",
        category: "electronics",
        listed_on: 5,
        sold_on: Some(20),
    },
    ProductSeed {
        id: "4",
        title: "Nintendo Switch",
        description: "付属品完備。動作確認済み。",
        price: 25_000,
        condition: ProductCondition::Good,
        seller: "user1",
        category: "books",
        listed_on: 12,
        sold_on: None,
    },
];

fn products() -> Result<Vec<Product>, SampleDataError> {
    PRODUCTS
        .iter()
        .map(|seed| -> Result<Product, SampleDataError> {
            let mut product = Product::new(
                ProductId::new(seed.id)?,
                ProductDraft {
                    title: seed.title.to_owned(),
                    description: seed.description.to_owned(),
                    price: seed.price,
                    condition: seed.condition,
                    seller_id: UserId::new(seed.seller)?,
                    category_id: CategoryId::new(seed.category)?,
                    images: vec![PLACEHOLDER_IMAGE.to_owned()],
                },
                date(2024, 1, seed.listed_on)?,
            )?;
            if let Some(day) = seed.sold_on {
                product.mark_as_sold(date(2024, 1, day)?)?;
            }
            Ok(product)
        })
        .collect()
}

fn users() -> Result<Vec<User>, SampleDataError> {
    [
        ("user1", "yamada", "山田太郎", 4.8),
        ("user2", "sato", "佐藤花子", 4.6),
        ("user3", "tanaka", "田中次郎", 4.9),
    ]
    .into_iter()
    .map(|(id, username, display_name, rating)| -> Result<User, SampleDataError> {
        Ok(User::new(
            UserId::new(id)?,
            UserProfile {
                username: username.to_owned(),
                email: format!("{username}@example.com"),
                display_name: display_name.to_owned(),
                avatar: None,
                rating,
            },
            date(2024, 1, 1)?,
        )?)
    })
    .collect()
}

fn reviews() -> Result<Vec<Review>, SampleDataError> {
    [
        (
            "1",
            "1",
            "user2",
            "user1",
            5,
            "とても良い商品でした！梱包も丁寧で満足です。",
            "iPhone 14 Pro",
            "佐藤花子",
            22,
        ),
        (
            "2",
            "2",
            "user3",
            "user2",
            4,
            "思っていたより状態が良くて嬉しいです。",
            "ナイキ エアマックス",
            "田中次郎",
            21,
        ),
        (
            "3",
            "3",
            "user1",
            "user3",
            5,
            "新品同様でした！迅速な対応ありがとうございました。",
            "MacBook Air M2",
            "山田太郎",
            20,
        ),
    ]
    .into_iter()
    .map(
        |(id, product, buyer, seller, rating, comment, title, buyer_name, day)| -> Result<
            Review,
            SampleDataError,
        > {
            Ok(Review::new(
                ReviewId::new(id)?,
                ReviewDraft {
                    product_id: ProductId::new(product)?,
                    buyer_id: UserId::new(buyer)?,
                    seller_id: UserId::new(seller)?,
                    rating: Rating::new(rating)?,
                    comment: comment.to_owned(),
                    product_title: title.to_owned(),
                    buyer_name: buyer_name.to_owned(),
                },
                date(2024, 1, day)?,
            ))
        },
    )
    .collect()
}

fn stamp_cards() -> Result<Vec<StampCard>, SampleDataError> {
    let mut card = StampCard::new(
        StampCardId::new("1")?,
        UserId::new("current-user")?,
        date(2024, 1, 1)?,
    );
    for _ in 0..3 {
        card.add_stamp(date(2024, 1, 20)?);
    }
    Ok(vec![card])
}

fn rankings() -> Result<Vec<CategoryRanking>, SampleDataError> {
    [
        ("electronics", "家電・スマホ・カメラ", 156, 2_340_000),
        ("fashion", "ファッション", 134, 890_000),
        ("books", "本・音楽・ゲーム", 98, 450_000),
        ("sports", "スポーツ・レジャー", 76, 680_000),
        ("home", "インテリア・住まい", 54, 320_000),
    ]
    .into_iter()
    .zip(1_u32..)
    .map(|((id, name, sold_count, total_revenue), rank)| {
        Ok::<_, SampleDataError>(CategoryRanking {
            category_id: CategoryId::new(id)?,
            category_name: name.to_owned(),
            sold_count,
            total_revenue,
            rank,
        })
    })
    .collect()
}

/// Build the full sample set.
pub fn sample_data() -> Result<SampleData, SampleDataError> {
    Ok(SampleData {
        users: users()?,
        products: products()?,
        reviews: reviews()?,
        stamp_cards: stamp_cards()?,
        rankings: rankings()?,
    })
}
