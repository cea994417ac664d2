//! Property-Based Test Generators
//!
//! Proptest strategies for inputs that pass (or deliberately fail) the
//! record validators, plus `fake`-backed helpers for realistic records.

use chrono::{Days, NaiveDate};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::ADULT_AGE_YEARS;
use core_kernel::APPROX_DAYS_PER_YEAR;
use domain_claims::ClaimStatus;
use domain_party::Policyholder;

/// Day count at which a holder counts as an adult
pub fn adult_threshold_days() -> u64 {
    (ADULT_AGE_YEARS * APPROX_DAYS_PER_YEAR) as u64
}

/// Strategy for emails accepted by the email validator
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9._]{0,9}", "[a-z]{3,8}", "(com|org|net|co\\.uk)")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

/// Strategy for strings the email validator rejects
pub fn invalid_email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{3,10}",
        "[a-z]{3,10}\\.[a-z]{2,3}",
        "@[a-z]{3,8}\\.com",
        "[a-z]{3,8}@[a-z]{3,8}",
        "[a-z]{3,8}@@[a-z]{3,8}\\.com",
    ]
}

/// Strategy for phone numbers accepted by the phone validator
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "\\+?1?[0-9]{9,15}"
}

/// Strategy for phone numbers the phone validator rejects
pub fn invalid_phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,8}",
        "[0-9]{3}-[0-9]{3}-[0-9]{4}",
        "[a-z]{9,15}",
        "\\+\\+[0-9]{10}",
    ]
}

/// Strategy for birth dates that make a holder an adult on `today`
pub fn adult_birth_date_strategy(today: NaiveDate) -> impl Strategy<Value = NaiveDate> {
    (adult_threshold_days()..adult_threshold_days() + 30_000).prop_map(move |d| today - Days::new(d))
}

/// Strategy for birth dates that leave a holder short of adulthood on `today`
pub fn minor_birth_date_strategy(today: NaiveDate) -> impl Strategy<Value = NaiveDate> {
    (0..adult_threshold_days()).prop_map(move |d| today - Days::new(d))
}

/// Strategy for strictly positive amounts with up to two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_00i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for zero or negative amounts
pub fn non_positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000_00i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    proptest::sample::select(ClaimStatus::ALL.to_vec())
}

/// Strategy for record ids with the given prefix, e.g. `PH042`
pub fn id_strategy(prefix: &'static str) -> impl Strategy<Value = String> {
    (1u32..1000u32).prop_map(move |n| format!("{}{:03}", prefix, n))
}

/// A realistic adult policyholder with generated contact details
pub fn fake_policyholder(id: &str, today: NaiveDate) -> Policyholder {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let phone = format!("+1{}", (1_000_000_000u64..10_000_000_000u64).fake::<u64>());
    let age_days: u64 = (adult_threshold_days()..adult_threshold_days() + 20_000).fake();
    Policyholder::new(id, name, phone, email, today - Days::new(age_days))
}
