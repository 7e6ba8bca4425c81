//! Random-but-plausible contact data for tests

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

/// A random full name.
pub fn full_name() -> String {
    Name().fake()
}

/// A random, syntactically valid email address.
pub fn email() -> String {
    SafeEmail().fake()
}

/// A random phone number.
pub fn phone() -> String {
    PhoneNumber().fake()
}
