//! # Demo Data
//!
//! Users and reports the store starts with when demo data is enabled.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::{
    item::{Item, ItemKind, Status},
    user::{Role, User},
};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap_or_default()
}

fn user(id: &str, email: &str, name: &str, role: Role, created_at: DateTime<Utc>) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        avatar: None,
        created_at,
    }
}

/// Demo accounts. `admin@university.edu` is the only administrator.
pub fn users() -> Vec<User> {
    let mut john = user(
        "1",
        "john.doe@university.edu",
        "John Doe",
        Role::User,
        at(2024, 1, 15, 0, 0),
    );
    john.avatar = Some(
        "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?w=150&h=150".to_string(),
    );

    let mut admin = user(
        "4",
        "admin@university.edu",
        "Admin User",
        Role::Admin,
        at(2024, 1, 1, 0, 0),
    );
    admin.avatar = Some(
        "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?w=150&h=150"
            .to_string(),
    );

    vec![
        john,
        user(
            "2",
            "jane.smith@university.edu",
            "Jane Smith",
            Role::User,
            at(2024, 1, 1, 0, 0),
        ),
        user(
            "3",
            "mike.johnson@university.edu",
            "Mike Johnson",
            Role::User,
            at(2024, 1, 10, 0, 0),
        ),
        admin,
    ]
}

struct Report {
    id: &'static str,
    kind: ItemKind,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    location: &'static str,
    date: NaiveDate,
    photo_url: Option<&'static str>,
    status: Status,
    reporter: usize,
    created_at: DateTime<Utc>,
}

/// Demo reports, newest first.
pub fn items(users: &[User]) -> Vec<Arc<Item>> {
    let reports = [
        Report {
            id: "1",
            kind: ItemKind::Lost,
            title: "MacBook Pro 13-inch",
            description: "Silver MacBook Pro with some stickers on the back. Lost in the library on Tuesday.",
            category: "Electronics",
            location: "Central Library",
            date: day(2024, 1, 15),
            photo_url: Some("https://images.pexels.com/photos/205421/pexels-photo-205421.jpeg?w=400"),
            status: Status::Verified,
            reporter: 0,
            created_at: at(2024, 1, 15, 10, 30),
        },
        Report {
            id: "2",
            kind: ItemKind::Found,
            title: "Blue Water Bottle",
            description: "Stainless steel water bottle with university logo. Found near the gym.",
            category: "Personal Items",
            location: "Recreation Center",
            date: day(2024, 1, 14),
            photo_url: Some("https://images.pexels.com/photos/3766227/pexels-photo-3766227.jpeg?w=400"),
            status: Status::Verified,
            reporter: 1,
            created_at: at(2024, 1, 14, 14, 20),
        },
        Report {
            id: "3",
            kind: ItemKind::Lost,
            title: "Black Leather Wallet",
            description: "Black leather wallet containing student ID and some cash. Lost somewhere on campus.",
            category: "Personal Items",
            location: "Student Union",
            date: day(2024, 1, 13),
            photo_url: None,
            status: Status::Verified,
            reporter: 2,
            created_at: at(2024, 1, 13, 16, 45),
        },
        Report {
            id: "4",
            kind: ItemKind::Found,
            title: "iPhone 14 with Blue Case",
            description: "Found iPhone with a blue protective case. Screen has a small crack.",
            category: "Electronics",
            location: "Engineering Building",
            date: day(2024, 1, 12),
            photo_url: Some("https://images.pexels.com/photos/404280/pexels-photo-404280.jpeg?w=400"),
            status: Status::Pending,
            reporter: 3,
            created_at: at(2024, 1, 12, 11, 15),
        },
    ];

    reports
        .into_iter()
        .filter_map(|r| {
            let reporter = users.get(r.reporter)?;
            Some(Arc::new(Item {
                id: r.id.to_string(),
                kind: r.kind,
                title: r.title.to_string(),
                description: r.description.to_string(),
                category: r.category.to_string(),
                location: r.location.to_string(),
                date: r.date,
                photo_url: r.photo_url.map(str::to_string),
                status: r.status,
                user_id: reporter.id.clone(),
                user: reporter.clone(),
                created_at: r.created_at,
                updated_at: r.created_at,
            }))
        })
        .collect()
}
