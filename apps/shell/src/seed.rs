//! # Seed Data
//!
//! The fixed dataset loaded once at process start, in lieu of persistent
//! storage. Nothing here survives a restart.
//!
//! ## Contents
//! - Six catalog products across five categories (two with running discounts)
//! - Two registered customers
//! - Two historical orders (newest first), linked to those customers
//! - Three hero slides
//! - One product request

use chrono::{Duration, Utc};

use olala_core::{
    new_entity_id, AppState, CartItem, CustomerInfo, HeroSlide, Order, OrderStatus,
    PaymentMethod, Product, ProductRequest, User,
};

/// Builds the initial application state.
pub fn seed_state() -> AppState {
    let now = Utc::now();

    let products = vec![
        Product {
            id: new_entity_id(),
            name: "Premium Graphics Bundle".to_string(),
            description: "A massive collection of over 10,000 premium graphics resources, \
                          including vectors, icons, and templates. Perfect for designers \
                          and content creators."
                .to_string(),
            price_cents: 4999,
            discount_price_cents: Some(2999),
            discount_end_date: Some(now + Duration::days(5)),
            images: vec![
                "https://picsum.photos/seed/gfx1/800/600".to_string(),
                "https://picsum.photos/seed/gfx2/800/600".to_string(),
            ],
            category: "Graphics Resources".to_string(),
            tags: vec![
                "Graphics Tools".to_string(),
                "VIP".to_string(),
                "Sale".to_string(),
            ],
            is_featured: true,
            is_live: true,
            stock: 100,
            digital_file: Some("https://cdn.olaladot.com/files/gfx-bundle.zip".to_string()),
        },
        Product {
            id: new_entity_id(),
            name: "Streaming Service 1-Year Subscription".to_string(),
            description: "Enjoy unlimited access to thousands of movies and TV shows with \
                          this 1-year subscription to our premium streaming service."
                .to_string(),
            price_cents: 12000,
            discount_price_cents: None,
            discount_end_date: None,
            images: vec![
                "https://picsum.photos/seed/stream1/800/600".to_string(),
                "https://picsum.photos/seed/stream2/800/600".to_string(),
            ],
            category: "Subscription".to_string(),
            tags: vec!["Subscription".to_string(), "Entertainment".to_string()],
            is_featured: true,
            is_live: true,
            stock: 50,
            digital_file: None,
        },
        Product {
            id: new_entity_id(),
            name: "Ultimate Developer Software Pack".to_string(),
            description: "A suite of essential software for developers, including IDEs, \
                          testing tools, and project management applications."
                .to_string(),
            price_cents: 25000,
            discount_price_cents: Some(19999),
            discount_end_date: Some(now + Duration::days(3)),
            images: vec!["https://picsum.photos/seed/dev1/800/600".to_string()],
            category: "Software".to_string(),
            tags: vec![
                "Software".to_string(),
                "Development".to_string(),
                "VIP".to_string(),
            ],
            is_featured: false,
            is_live: true,
            stock: 30,
            digital_file: None,
        },
        Product {
            id: new_entity_id(),
            name: "$50 Universal Gift Card".to_string(),
            description: "The perfect gift for any occasion. This gift card can be redeemed \
                          for any product on our site."
                .to_string(),
            price_cents: 5000,
            discount_price_cents: None,
            discount_end_date: None,
            images: vec!["https://picsum.photos/seed/gift1/800/600".to_string()],
            category: "Gift Card".to_string(),
            tags: vec!["Gift Card".to_string(), "New".to_string()],
            is_featured: true,
            is_live: true,
            stock: 200,
            digital_file: Some("GIFT-CARD-CODE".to_string()),
        },
        Product {
            id: new_entity_id(),
            name: "Educational Combo Pack".to_string(),
            description: "Access to over 200 online courses on various subjects, from \
                          programming to digital marketing. A complete learning solution."
                .to_string(),
            price_cents: 9999,
            discount_price_cents: None,
            discount_end_date: None,
            images: vec![
                "https://picsum.photos/seed/edu1/800/600".to_string(),
                "https://picsum.photos/seed/edu2/800/600".to_string(),
            ],
            category: "Education".to_string(),
            tags: vec!["Educational Combo".to_string(), "Learning".to_string()],
            is_featured: false,
            is_live: true,
            stock: 100,
            digital_file: None,
        },
        Product {
            id: new_entity_id(),
            name: "Pro Video Editing Software".to_string(),
            description: "Industry-standard video editing software with advanced features \
                          like 4K support, motion tracking, and color grading."
                .to_string(),
            price_cents: 29900,
            discount_price_cents: None,
            discount_end_date: None,
            images: vec!["https://picsum.photos/seed/video1/800/600".to_string()],
            category: "Software".to_string(),
            tags: vec!["Software".to_string(), "Video Editing".to_string()],
            is_featured: true,
            is_live: true,
            stock: 45,
            digital_file: None,
        },
    ];

    let users = vec![
        User {
            id: new_entity_id(),
            name: "Rohan Ahmed".to_string(),
            email: "rohan@example.com".to_string(),
            phone: "01712345678".to_string(),
            address: "Dhaka, Bangladesh".to_string(),
            password: "rohan123".to_string(),
        },
        User {
            id: new_entity_id(),
            name: "Farah Islam".to_string(),
            email: "farah@example.com".to_string(),
            phone: "01812345678".to_string(),
            address: "Chittagong, Bangladesh".to_string(),
            password: "farah123".to_string(),
        },
    ];

    // Orders newest-first: the 2-day-old order sits above the 5-day-old one.
    let orders = vec![
        Order {
            id: "ORD-12346".to_string(),
            user_id: Some(users[1].id.clone()),
            customer: CustomerInfo {
                name: users[1].name.clone(),
                email: users[1].email.clone(),
                phone: users[1].phone.clone(),
                address: users[1].address.clone(),
            },
            items: vec![CartItem {
                product: products[1].clone(),
                quantity: 1,
            }],
            total_cents: 12000,
            payment_method: PaymentMethod::Nagad,
            transaction_id: Some("NG456ABC".to_string()),
            status: OrderStatus::Processing,
            date: now - Duration::days(2),
        },
        Order {
            id: "ORD-12345".to_string(),
            user_id: Some(users[0].id.clone()),
            customer: CustomerInfo {
                name: users[0].name.clone(),
                email: users[0].email.clone(),
                phone: users[0].phone.clone(),
                address: users[0].address.clone(),
            },
            items: vec![
                CartItem {
                    product: products[0].clone(),
                    quantity: 1,
                },
                CartItem {
                    product: products[3].clone(),
                    quantity: 2,
                },
            ],
            // Discounted graphics bundle + two gift cards.
            total_cents: 2999 + 5000 * 2,
            payment_method: PaymentMethod::Bkash,
            transaction_id: Some("BK123XYZ".to_string()),
            status: OrderStatus::Delivered,
            date: now - Duration::days(5),
        },
    ];

    let hero_slides = vec![
        HeroSlide {
            id: new_entity_id(),
            image_url: "https://picsum.photos/seed/hero1/1600/600".to_string(),
            title: "Ajab Site Ka Gajab Jinis".to_string(),
            subtitle: "The most unique digital products, all in one place.".to_string(),
            link: "/shop".to_string(),
        },
        HeroSlide {
            id: new_entity_id(),
            image_url: "https://picsum.photos/seed/hero2/1600/600".to_string(),
            title: "Graphics Bundle Flash Sale".to_string(),
            subtitle: "Over 10,000 premium resources at 40% off.".to_string(),
            link: "/shop?category=Graphics%20Resources".to_string(),
        },
        HeroSlide {
            id: new_entity_id(),
            image_url: "https://picsum.photos/seed/hero3/1600/600".to_string(),
            title: "Gift Cards for Every Occasion".to_string(),
            subtitle: "Let them pick their own gajab jinis.".to_string(),
            link: "/product/gift-card".to_string(),
        },
    ];

    let product_requests = vec![ProductRequest {
        id: new_entity_id(),
        name: "Anik Ahmed".to_string(),
        email: "anik@example.com".to_string(),
        message: "Could you stock a yearly Figma professional plan?".to_string(),
        date: now - Duration::days(1),
    }];

    AppState {
        products,
        cart: Vec::new(),
        orders,
        hero_slides,
        users,
        product_requests,
        current_user: None,
        is_authenticated: false,
        is_admin_authenticated: false,
    }
}
