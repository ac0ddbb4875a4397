//! Deterministic catalog generation from a seed.
//!
//! The RNG is seeded from [`SeedSpec::seed`], so the same spec always
//! produces the same users, courses, and enrollments.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::internet::raw::FreeEmail;
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::Name;
use fake::locales::EN;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::seed::{CatalogSeedData, CourseSeed, EnrollmentSeed, SeedSpec, UserSeed};

/// Attempts allowed per requested unique value before giving up.
const ATTEMPTS_PER_VALUE: usize = 10;

/// Course titles must hold at least this many characters.
const TITLE_MIN: usize = 3;

/// Course titles must hold at most this many characters.
const TITLE_MAX: usize = 255;

/// Generates a catalog from the seed spec.
///
/// Each user is enrolled in exactly one course; users are spread across
/// courses in order, so with three users and two courses the pairs are
/// `(0, 0)`, `(1, 0)`, and `(2, 1)`.
///
/// # Errors
///
/// Returns [`GenerationError`] if unique emails or titles cannot be produced
/// within the retry budget, or if users are requested without courses.
///
/// # Example
///
/// ```
/// use example_data::{EnrollmentSeed, SeedSpec, generate_catalog_seed};
///
/// let data = generate_catalog_seed(&SeedSpec::new(7)).expect("generated");
/// assert_eq!(
///     data.enrollments,
///     vec![
///         EnrollmentSeed { user_index: 0, course_index: 0 },
///         EnrollmentSeed { user_index: 1, course_index: 0 },
///         EnrollmentSeed { user_index: 2, course_index: 1 },
///     ]
/// );
/// ```
pub fn generate_catalog_seed(spec: &SeedSpec) -> Result<CatalogSeedData, GenerationError> {
    if spec.user_count > 0 && spec.course_count == 0 {
        return Err(GenerationError::NoCoursesForEnrollment {
            user_count: spec.user_count,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);
    let users = generate_users(&mut rng, spec.user_count)?;
    let courses = generate_courses(&mut rng, spec.course_count)?;
    let enrollments = spread_enrollments(spec.user_count, spec.course_count);

    Ok(CatalogSeedData {
        users,
        courses,
        enrollments,
    })
}

fn generate_users(rng: &mut ChaCha8Rng, count: usize) -> Result<Vec<UserSeed>, GenerationError> {
    let max_attempts = count.saturating_mul(ATTEMPTS_PER_VALUE);
    let mut seen = HashSet::with_capacity(count);
    let mut users = Vec::with_capacity(count);

    for _ in 0..max_attempts {
        if users.len() == count {
            break;
        }
        let raw_email: String = FreeEmail(EN).fake_with_rng(rng);
        let email = raw_email.trim().to_lowercase();
        if !seen.insert(email.clone()) {
            continue;
        }
        let name: String = Name(EN).fake_with_rng(rng);
        users.push(UserSeed { email, name });
    }

    if users.len() < count {
        return Err(GenerationError::EmailsExhausted {
            wanted: count,
            max_attempts,
        });
    }
    Ok(users)
}

fn generate_courses(
    rng: &mut ChaCha8Rng,
    count: usize,
) -> Result<Vec<CourseSeed>, GenerationError> {
    let max_attempts = count.saturating_mul(ATTEMPTS_PER_VALUE);
    let mut seen = HashSet::with_capacity(count);
    let mut courses = Vec::with_capacity(count);

    for _ in 0..max_attempts {
        if courses.len() == count {
            break;
        }
        let sentence: String = Sentence(EN, 4..5).fake_with_rng(rng);
        let title = sentence.trim().to_owned();
        let length = title.chars().count();
        if !(TITLE_MIN..=TITLE_MAX).contains(&length) || !seen.insert(title.clone()) {
            continue;
        }
        let description: String = Paragraph(EN, 1..3).fake_with_rng(rng);
        courses.push(CourseSeed {
            title,
            description: description.trim().to_owned(),
        });
    }

    if courses.len() < count {
        return Err(GenerationError::TitlesExhausted {
            wanted: count,
            max_attempts,
        });
    }
    Ok(courses)
}

fn spread_enrollments(user_count: usize, course_count: usize) -> Vec<EnrollmentSeed> {
    if course_count == 0 {
        return Vec::new();
    }
    (0..user_count)
        .map(|user_index| EnrollmentSeed {
            user_index,
            course_index: user_index
                .saturating_mul(course_count)
                .checked_div(user_count)
                .unwrap_or_default(),
        })
        .collect()
}
