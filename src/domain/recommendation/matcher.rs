//! Interest matcher - scores and ranks projects for a user.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::foundation::ProjectId;
use crate::domain::project::{recency_order, Project};
use crate::domain::user::User;

/// Points for a project whose category is one of the user's interests.
pub const CATEGORY_WEIGHT: u32 = 3;

/// Points per further interest some project tag names (case-insensitive).
pub const TAG_WEIGHT: u32 = 1;

/// A project suggested to a user, with the score that placed it.
///
/// Backfilled projects carry a score of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub project: Project,
    pub score: u32,
}

/// Interest-based project ranking.
pub struct InterestMatcher;

impl InterestMatcher {
    /// Interest score of `project` for `user`.
    ///
    /// # Algorithm
    /// score = CATEGORY_WEIGHT × [category ∈ interests]
    ///       + TAG_WEIGHT × |{interest ≠ category : some tag names it}|
    ///
    /// Each interest counts once, so repeated or case-variant tags and a tag
    /// restating the category add nothing.
    pub fn score(user: &User, project: &Project) -> u32 {
        let interests = user.interests();
        let category = project.category();
        let category_points = if interests.contains(&category) {
            CATEGORY_WEIGHT
        } else {
            0
        };
        let tag_hits = interests
            .iter()
            .filter(|interest| **interest != category)
            .filter(|interest| project.tags().iter().any(|tag| interest.matches_tag(tag)))
            .count() as u32;
        category_points + tag_hits * TAG_WEIGHT
    }

    /// Rank projects the user is not a member of.
    ///
    /// Projects with a positive score come first, ordered by score and then
    /// by recency. Remaining slots up to `limit` are filled with the most
    /// recently updated non-member projects. The result depends only on the
    /// inputs, not on the order of `projects`.
    ///
    /// # Edge Cases
    /// - `limit == 0`: empty result
    /// - No interests: pure recency backfill
    /// - Member of everything: empty result
    pub fn recommend(user: &User, projects: &[Project], limit: usize) -> Vec<Recommendation> {
        if limit == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<Recommendation> = projects
            .iter()
            .filter(|p| !p.is_member(user.id()))
            .map(|p| Recommendation {
                score: Self::score(user, p),
                project: p.clone(),
            })
            .collect();
        dedup_by_id(&mut candidates);

        let (mut scored, mut rest): (Vec<_>, Vec<_>) =
            candidates.into_iter().partition(|r| r.score > 0);

        scored.sort_by(ranked_order);
        scored.truncate(limit);

        let remaining = limit - scored.len();
        if remaining > 0 {
            rest.sort_by(|a, b| recency_order(&a.project, &b.project));
            scored.extend(rest.into_iter().take(remaining));
        }
        scored
    }
}

fn ranked_order(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| recency_order(&a.project, &b.project))
}

fn dedup_by_id(candidates: &mut Vec<Recommendation>) {
    let mut seen: HashSet<ProjectId> = HashSet::new();
    candidates.retain(|r| seen.insert(*r.project.id()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Category, ProjectId, Timestamp, UserId};
    use crate::domain::project::{NewProject, ProjectType};
    use crate::domain::user::NewUser;
    use proptest::prelude::*;

    fn user(interests: &[Category]) -> User {
        User::register(
            UserId::new(),
            NewUser {
                email: "ada@example.com".to_string(),
                username: "ada".to_string(),
                interests: interests.iter().copied().collect(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    fn project(category: Category, tags: &[&str], at: Timestamp) -> Project {
        Project::create(
            ProjectId::new(),
            NewProject {
                title: format!("{} project", category),
                description: String::new(),
                category: category.label().to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                attachments: vec![],
                project_type: ProjectType::Combined,
            },
            UserId::new(),
            at,
        )
        .unwrap()
    }

    #[test]
    fn score_counts_category_and_matching_tags() {
        let u = user(&[Category::Ai, Category::Robotics]);
        let p = project(Category::Ai, &["robotics", "vision", "AI"], Timestamp::now());

        // category 3 + "robotics" 1; "AI" restates the category
        assert_eq!(InterestMatcher::score(&u, &p), 4);
    }

    #[test]
    fn case_variant_tags_count_once() {
        let u = user(&[Category::Ai]);
        let p = project(Category::Physics, &["AI", "ai", "Ai", "aI"], Timestamp::now());
        assert_eq!(InterestMatcher::score(&u, &p), TAG_WEIGHT);
    }

    #[test]
    fn exact_category_match_outranks_tag_only_match() {
        let base = Timestamp::now();
        let u = user(&[Category::Design, Category::Ai]);
        let by_category = project(Category::Design, &[], base);
        let by_tags = project(Category::Physics, &["AI", "ai", "Ai", "aI"], base.plus_secs(60));

        let recs = InterestMatcher::recommend(&u, &[by_tags, by_category.clone()], 1);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].project.id(), by_category.id());
        assert_eq!(recs[0].score, CATEGORY_WEIGHT);
    }

    #[test]
    fn score_is_zero_without_overlap() {
        let u = user(&[Category::Arts]);
        let p = project(Category::Physics, &["optics"], Timestamp::now());
        assert_eq!(InterestMatcher::score(&u, &p), 0);
    }

    #[test]
    fn scored_projects_rank_before_backfill() {
        let base = Timestamp::now();
        let u = user(&[Category::Design]);
        let matching = project(Category::Design, &[], base);
        let newer = project(Category::Chemistry, &[], base.plus_secs(60));

        let recs = InterestMatcher::recommend(&u, &[newer.clone(), matching.clone()], 6);

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].project.id(), matching.id());
        assert_eq!(recs[0].score, CATEGORY_WEIGHT);
        assert_eq!(recs[1].project.id(), newer.id());
        assert_eq!(recs[1].score, 0);
    }

    #[test]
    fn equal_scores_break_ties_by_recency() {
        let base = Timestamp::now();
        let u = user(&[Category::Business]);
        let older = project(Category::Business, &[], base);
        let newer = project(Category::Business, &[], base.plus_secs(5));

        let recs = InterestMatcher::recommend(&u, &[older.clone(), newer.clone()], 6);
        assert_eq!(recs[0].project.id(), newer.id());
        assert_eq!(recs[1].project.id(), older.id());
    }

    #[test]
    fn member_projects_are_excluded() {
        let u = user(&[Category::Ai]);
        let mut joined = project(Category::Ai, &[], Timestamp::now());
        joined.add_member(*u.id(), Timestamp::now());

        assert!(InterestMatcher::recommend(&u, &[joined], 6).is_empty());
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let u = user(&[Category::Ai]);
        let p = project(Category::Ai, &[], Timestamp::now());
        assert!(InterestMatcher::recommend(&u, &[p], 0).is_empty());
    }

    #[test]
    fn limit_truncates_scored_projects() {
        let base = Timestamp::now();
        let u = user(&[Category::Ai]);
        let projects: Vec<_> = (0..5)
            .map(|i| project(Category::Ai, &[], base.plus_secs(i)))
            .collect();

        let recs = InterestMatcher::recommend(&u, &projects, 3);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.score == CATEGORY_WEIGHT));
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_tag() -> impl Strategy<Value = String> {
        prop_oneof![
            arb_category().prop_map(|c| c.label().to_lowercase()),
            "[a-z]{3,8}",
        ]
    }

    fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
        prop::collection::vec(
            (arb_category(), prop::collection::vec(arb_tag(), 0..4), 0i64..1000),
            0..12,
        )
        .prop_map(|entries| {
            let base = Timestamp::now();
            entries
                .into_iter()
                .map(|(category, tags, offset)| {
                    let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                    project(category, &tags, base.plus_secs(offset))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn result_does_not_depend_on_input_order(
            interests in prop::collection::vec(arb_category(), 0..4),
            projects in arb_projects(),
            limit in 0usize..10,
        ) {
            let u = user(&interests);
            let forward = InterestMatcher::recommend(&u, &projects, limit);

            let mut reversed = projects.clone();
            reversed.reverse();
            let backward = InterestMatcher::recommend(&u, &reversed, limit);

            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn result_size_is_bounded_by_limit_and_candidates(
            interests in prop::collection::vec(arb_category(), 0..4),
            projects in arb_projects(),
            limit in 0usize..10,
        ) {
            let u = user(&interests);
            let recs = InterestMatcher::recommend(&u, &projects, limit);
            prop_assert_eq!(recs.len(), limit.min(projects.len()));
        }

        #[test]
        fn scores_never_increase_down_the_list(
            interests in prop::collection::vec(arb_category(), 0..4),
            projects in arb_projects(),
        ) {
            let u = user(&interests);
            let recs = InterestMatcher::recommend(&u, &projects, 50);
            for pair in recs.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for r in &recs {
                prop_assert_eq!(r.score, InterestMatcher::score(&u, &r.project));
            }
        }
    }
}
