/// Score every resume starts from before any section counts are added.
pub const BASE_SCORE: i64 = 50;
pub const MAX_SCORE: i64 = 95;

const POINTS_PER_SKILL: i64 = 2;
const POINTS_PER_EDUCATION: i64 = 5;
const POINTS_PER_EXPERIENCE: i64 = 10;

/// Heuristic resume score: 50 + 2*skills + 5*education + 10*experience, capped at 95.
pub fn compute_resume_score(skills: usize, education: usize, experience: usize) -> i64 {
    let points = weighted(skills, POINTS_PER_SKILL)
        .saturating_add(weighted(education, POINTS_PER_EDUCATION))
        .saturating_add(weighted(experience, POINTS_PER_EXPERIENCE));
    BASE_SCORE.saturating_add(points).min(MAX_SCORE)
}

fn weighted(count: usize, points: i64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX).saturating_mul(points)
}
