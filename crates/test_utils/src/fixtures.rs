//! Pre-built Test Fixtures
//!
//! The reference scenario used throughout the suite:
//!
//! | Record | Key facts |
//! |---|---|
//! | Policyholder `PH001` | born 1980-01-01 |
//! | Policy `POL001` | 2023-01-01 to 2024-01-01, coverage 50000, premium 1000 |
//! | Claim `CL001` | incident 2023-06-01, amount 5000, submitted 2023-06-15 |

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_claims::NewClaim;
use domain_party::Policyholder;
use domain_policy::Policy;

/// Fixed dates for deterministic tests
pub struct DateFixtures;

impl DateFixtures {
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
    }

    /// The date the fixed test clock reports
    pub fn today() -> NaiveDate {
        Self::ymd(2023, 6, 20)
    }

    pub fn adult_birth_date() -> NaiveDate {
        Self::ymd(1980, 1, 1)
    }

    pub fn policy_start() -> NaiveDate {
        Self::ymd(2023, 1, 1)
    }

    pub fn policy_end() -> NaiveDate {
        Self::ymd(2024, 1, 1)
    }

    pub fn incident() -> NaiveDate {
        Self::ymd(2023, 6, 1)
    }

    pub fn submitted() -> NaiveDate {
        Self::ymd(2023, 6, 15)
    }
}

/// Fixture amounts
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn coverage() -> Decimal {
        dec!(50000)
    }

    pub fn premium() -> Decimal {
        dec!(1000)
    }

    pub fn claim() -> Decimal {
        dec!(5000)
    }

    pub fn over_coverage() -> Decimal {
        dec!(60000)
    }
}

/// The reference PH001 / POL001 / CL001 records
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    pub fn policyholder() -> Policyholder {
        Policyholder::new(
            "PH001",
            "John Doe",
            "+1234567890",
            "john@example.com",
            DateFixtures::adult_birth_date(),
        )
    }

    pub fn policy() -> Policy {
        Policy::new(
            "POL001",
            "PH001",
            "Auto",
            DateFixtures::policy_start(),
            DateFixtures::policy_end(),
            AmountFixtures::coverage(),
            AmountFixtures::premium(),
        )
    }

    pub fn claim() -> NewClaim {
        NewClaim::new(
            "CL001",
            "POL001",
            DateFixtures::incident(),
            "Car accident",
            AmountFixtures::claim(),
        )
        .submitted_on(DateFixtures::submitted())
    }
}
