//! Form validation with error accumulation
//!
//! Run with: cargo run --example signup_form

use tidewater::{Either, Maybe, Validation};

#[derive(Debug)]
struct SignupForm {
    email: String,
    password: String,
    confirm_password: String,
    age: String,
    referral: Option<String>,
}

#[derive(Debug)]
struct User {
    email: String,
    age: u8,
    referral: Maybe<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum FieldError {
    InvalidEmail,
    PasswordTooShort(usize),
    PasswordsDiffer,
    AgeNotANumber(String),
    Underage(u8),
}

fn validate_email(email: &str) -> Validation<FieldError, String> {
    Validation::valid(email.trim().to_lowercase())
        .filter_or_else(|e| e.contains('@') && e.contains('.'), || FieldError::InvalidEmail)
}

fn validate_password(password: &str, confirm: &str) -> Validation<FieldError, ()> {
    let long_enough = if password.len() >= 8 {
        Validation::valid(())
    } else {
        Validation::invalid(FieldError::PasswordTooShort(password.len()))
    };
    let matching = if password == confirm {
        Validation::valid(())
    } else {
        Validation::invalid(FieldError::PasswordsDiffer)
    };
    long_enough.zip(matching).map(|_| ())
}

// Parsing must succeed before the range can be checked, so this step short-circuits.
fn validate_age(raw: &str) -> Validation<FieldError, u8> {
    Either::from_result(raw.trim().parse::<u8>())
        .map_left(|_| FieldError::AgeNotANumber(raw.to_string()))
        .into_validation()
        .flat_map(|age| {
            if age >= 18 {
                Validation::valid(age)
            } else {
                Validation::invalid(FieldError::Underage(age))
            }
        })
}

fn validate_signup(form: &SignupForm) -> Validation<FieldError, User> {
    Validation::map3(
        validate_email(&form.email),
        validate_password(&form.password, &form.confirm_password),
        validate_age(&form.age),
        |email, (), age| User {
            email,
            age,
            referral: Maybe::from_option(form.referral.clone()).filter(|r| !r.is_empty()),
        },
    )
}

fn main() {
    println!("=== Signup Form Validation ===\n");

    let forms = [
        SignupForm {
            email: "Ada@Example.com".to_string(),
            password: "analytical".to_string(),
            confirm_password: "analytical".to_string(),
            age: "36".to_string(),
            referral: Some("grace".to_string()),
        },
        SignupForm {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            confirm_password: "shorter".to_string(),
            age: "twelve".to_string(),
            referral: None,
        },
        SignupForm {
            email: "kid@example.com".to_string(),
            password: "long enough".to_string(),
            confirm_password: "long enough".to_string(),
            age: "12".to_string(),
            referral: Some(String::new()),
        },
    ];

    for (i, form) in forms.iter().enumerate() {
        println!("Form {}: {:?}", i + 1, form);
        match validate_signup(form) {
            Validation::Valid(user) => {
                let referral = user.referral.as_ref().fold(|| "none".to_string(), |r| r.clone());
                println!("  ok: {} (age {}), referred by {}", user.email, user.age, referral);
            }
            Validation::Invalid(errors) => {
                println!("  {} error(s):", errors.len());
                for err in errors.iter() {
                    println!("  - {:?}", err);
                }
            }
        }
        println!();
    }
}
