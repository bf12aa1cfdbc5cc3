//! Record fixtures shared by the integration tests.

#![allow(dead_code)]

use serde::Serialize;
use structcopy::{impl_one_of, impl_record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Status {
    #[default]
    Pending,
    Active,
    Closed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl_record!(Address {
    scalar street,
    scalar city,
    scalar zip,
});

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Email {
    pub address: String,
    pub verified: bool,
}

impl_record!(Email { scalar address, scalar verified });

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Phone {
    pub number: String,
    pub extension: Option<u16>,
}

impl_record!(Phone { scalar number, scalar extension });

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pager {
    pub code: u32,
}

impl_record!(Pager { scalar code });

#[derive(Clone, Debug, PartialEq)]
pub enum Contact {
    Email(Email),
    Phone(Phone),
}

impl_one_of!(Contact {
    Email(Email),
    Phone(Phone),
});

#[derive(Clone, Debug, PartialEq)]
pub enum LegacyContact {
    Phone(Phone),
    Pager(Pager),
}

impl_one_of!(LegacyContact {
    Phone(Phone),
    Pager(Pager),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub status: Status,
    pub tags: Vec<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub previous: Vec<Address>,
    pub _etag: String,
}

impl_record!(Customer {
    scalar id,
    scalar name,
    scalar status,
    scalars tags,
    nested address,
    one_of contact,
    records previous,
    scalar _etag,
});

/// Same field names as [`Customer`], but `contact` only knows phones and
/// pagers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyCustomer {
    pub id: u64,
    pub name: String,
    pub status: Status,
    pub tags: Vec<String>,
    pub address: Option<Address>,
    pub contact: Option<LegacyContact>,
    pub previous: Vec<Address>,
}

impl_record!(LegacyCustomer {
    scalar id,
    scalar name,
    scalar status,
    scalars tags,
    nested address,
    one_of contact,
    records previous,
});

/// Summary view with a subset of [`Customer`]'s fields; `id` has a
/// different type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerSummary {
    pub id: String,
    pub name: String,
    pub address: Option<Address>,
}

impl_record!(CustomerSummary {
    scalar id,
    scalar name,
    nested address,
});

/// Declares `address` as a plain string instead of a record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatCustomer {
    pub name: String,
    pub address: String,
}

impl_record!(FlatCustomer { scalar name, scalar address });

/// Singly linked list for depth tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Link {
    pub value: u32,
    pub next: Option<Box<Link>>,
}

impl_record!(Link { scalar value, nested next });

pub fn link_chain(length: u32) -> Link {
    (1..length).rev().fold(Link { value: length, next: None }, |next, value| Link {
        value,
        next: Some(Box::new(next)),
    })
}

pub fn home() -> Address {
    Address {
        street: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        zip: "12345".to_owned(),
    }
}

pub fn customer() -> Customer {
    Customer {
        id: 7,
        name: "Ada".to_owned(),
        status: Status::Active,
        tags: vec!["vip".to_owned(), "beta".to_owned()],
        address: Some(home()),
        contact: Some(Contact::Phone(Phone {
            number: "555-0100".to_owned(),
            extension: Some(12),
        })),
        previous: vec![
            Address {
                street: "9 Old Rd".to_owned(),
                city: "Shelbyville".to_owned(),
                zip: "54321".to_owned(),
            },
            Address::default(),
        ],
        _etag: "abc".to_owned(),
    }
}
