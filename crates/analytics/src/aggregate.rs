//! Aggregate statistics over the passenger dataset.
//!
//! Survival rates for empty groups are reported as `None` (JSON `null`)
//! rather than dividing by zero.

use serde::Serialize;

use dataset::Dataset;
use types::{Passenger, PassengerClass, Sex};

use crate::stats::{mean, rate};

// =============================================================================
// Summary
// =============================================================================

/// Passenger counts per ticket class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDistribution {
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

/// Response for `/api/statistics`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_passengers: usize,
    pub survived: usize,
    pub perished: usize,
    /// Mean of survived as 0/1.
    pub survival_rate: f64,
    pub avg_age: f64,
    pub avg_fare: f64,
    pub male_passengers: usize,
    pub female_passengers: usize,
    pub class_distribution: ClassDistribution,
}

/// Compute headline statistics for the whole dataset.
pub fn summary_statistics(dataset: &Dataset) -> Summary {
    let records = dataset.records();
    let total = records.len();
    let survived = records.iter().filter(|p| p.survived).count();
    let count_class = |class: PassengerClass| records.iter().filter(|p| p.class == class).count();
    let count_sex = |sex: Sex| records.iter().filter(|p| p.sex == sex).count();

    Summary {
        total_passengers: total,
        survived,
        perished: total - survived,
        // A constructed dataset is never empty, so the fallbacks are unreachable.
        survival_rate: rate(survived, total).unwrap_or_default(),
        avg_age: mean(records.iter().map(|p| f64::from(p.age))).unwrap_or_default(),
        avg_fare: mean(records.iter().map(|p| p.fare)).unwrap_or_default(),
        male_passengers: count_sex(Sex::Male),
        female_passengers: count_sex(Sex::Female),
        class_distribution: ClassDistribution {
            first: count_class(PassengerClass::First),
            second: count_class(PassengerClass::Second),
            third: count_class(PassengerClass::Third),
        },
    }
}

// =============================================================================
// Survival Breakdowns
// =============================================================================

/// Survival figures for one ticket class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSurvival {
    pub class: PassengerClass,
    pub total: usize,
    pub survived: usize,
    pub survival_rate: Option<f64>,
}

/// Survival figures for one sex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderSurvival {
    pub gender: Sex,
    pub total: usize,
    pub survived: usize,
    pub survival_rate: Option<f64>,
}

/// (total, survived) for the passengers matching `predicate`.
fn survival_counts<F>(dataset: &Dataset, predicate: F) -> (usize, usize)
where
    F: Fn(&Passenger) -> bool,
{
    dataset
        .iter()
        .filter(|p| predicate(*p))
        .fold((0, 0), |(total, survived), p| {
            (total + 1, survived + usize::from(p.survived))
        })
}

/// Survival per class, always in the order 1, 2, 3.
pub fn survival_by_class(dataset: &Dataset) -> Vec<ClassSurvival> {
    PassengerClass::ALL
        .into_iter()
        .map(|class| {
            let (total, survived) = survival_counts(dataset, |p| p.class == class);
            ClassSurvival {
                class,
                total,
                survived,
                survival_rate: rate(survived, total),
            }
        })
        .collect()
}

/// Survival per sex, always in the order male, female.
pub fn survival_by_gender(dataset: &Dataset) -> Vec<GenderSurvival> {
    Sex::ALL
        .into_iter()
        .map(|gender| {
            let (total, survived) = survival_counts(dataset, |p| p.sex == gender);
            GenderSurvival {
                gender,
                total,
                survived,
                survival_rate: rate(survived, total),
            }
        })
        .collect()
}

// =============================================================================
// Age Distribution
// =============================================================================

/// Bucket edges. The first bucket is `[0, 10]`, the rest are `(lo, hi]`.
const AGE_EDGES: [u8; 9] = [0, 10, 20, 30, 40, 50, 60, 70, 80];

const AGE_LABELS: [&str; 8] = [
    "0-10", "11-20", "21-30", "31-40", "41-50", "51-60", "61-70", "71-80",
];

/// One non-empty age bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    pub age_group: &'static str,
    pub count: usize,
}

/// Index of the bucket containing `age`, or `None` if it lies past the last edge.
fn age_bucket(age: u8) -> Option<usize> {
    AGE_EDGES
        .windows(2)
        .enumerate()
        .position(|(idx, edge)| {
            let lower_ok = if idx == 0 { age >= edge[0] } else { age > edge[0] };
            lower_ok && age <= edge[1]
        })
}

/// Histogram of ages over fixed ten-year buckets.
///
/// Only non-empty buckets are returned, in ascending order.
pub fn age_distribution(dataset: &Dataset) -> Vec<AgeBucket> {
    let mut counts = [0usize; AGE_LABELS.len()];
    for passenger in dataset {
        if let Some(idx) = age_bucket(passenger.age) {
            counts[idx] += 1;
        }
    }

    AGE_LABELS
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(age_group, count)| AgeBucket { age_group, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{first_class_men, five_passengers};
    use dataset::{DatasetConfig, generate};

    #[test]
    fn test_summary_on_five_passengers() {
        let summary = summary_statistics(&five_passengers());

        assert_eq!(summary.total_passengers, 5);
        assert_eq!(summary.survived, 3);
        assert_eq!(summary.perished, 2);
        assert_eq!(summary.survival_rate, 0.6);
        assert_eq!(summary.avg_age, 32.2);
        assert_eq!(summary.avg_fare, 40.0);
        assert_eq!(summary.male_passengers, 3);
        assert_eq!(summary.female_passengers, 2);
        assert_eq!(
            summary.class_distribution,
            ClassDistribution {
                first: 2,
                second: 1,
                third: 2
            }
        );
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(summary_statistics(&five_passengers())).unwrap();
        assert_eq!(json["total_passengers"], 5);
        assert_eq!(json["class_distribution"]["third"], 2);
    }

    #[test]
    fn test_survival_by_class() {
        let rows = survival_by_class(&five_passengers());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].class, PassengerClass::First);
        assert_eq!((rows[0].total, rows[0].survived), (2, 2));
        assert_eq!(rows[0].survival_rate, Some(1.0));
        assert_eq!((rows[1].total, rows[1].survived), (1, 1));
        assert_eq!((rows[2].total, rows[2].survived), (2, 0));
        assert_eq!(rows[2].survival_rate, Some(0.0));
    }

    #[test]
    fn test_survival_by_gender() {
        let rows = survival_by_gender(&five_passengers());

        assert_eq!(rows[0].gender, Sex::Male);
        assert_eq!((rows[0].total, rows[0].survived), (3, 1));
        assert_eq!(rows[1].gender, Sex::Female);
        assert_eq!((rows[1].total, rows[1].survived), (2, 2));
        assert_eq!(rows[1].survival_rate, Some(1.0));
    }

    #[test]
    fn test_empty_groups_report_null_rate() {
        let dataset = first_class_men();

        let classes = survival_by_class(&dataset);
        assert_eq!(classes[0].survival_rate, Some(0.5));
        assert_eq!(classes[1].total, 0);
        assert_eq!(classes[1].survival_rate, None);

        let genders = survival_by_gender(&dataset);
        assert_eq!(genders[1].survival_rate, None);

        let json = serde_json::to_value(&classes[2]).unwrap();
        assert!(json["survival_rate"].is_null());
        assert_eq!(json["class"], 3);
    }

    #[test]
    fn test_gender_serialization() {
        let json = serde_json::to_value(survival_by_gender(&five_passengers())).unwrap();
        assert_eq!(json[0]["gender"], "male");
        assert_eq!(json[1]["gender"], "female");
    }

    #[test]
    fn test_age_bucket_edges() {
        assert_eq!(age_bucket(0), Some(0));
        assert_eq!(age_bucket(1), Some(0));
        assert_eq!(age_bucket(10), Some(0));
        assert_eq!(age_bucket(11), Some(1));
        assert_eq!(age_bucket(20), Some(1));
        assert_eq!(age_bucket(21), Some(2));
        assert_eq!(age_bucket(71), Some(7));
        assert_eq!(age_bucket(80), Some(7));
        assert_eq!(age_bucket(81), None);
    }

    #[test]
    fn test_age_distribution_skips_empty_buckets() {
        let buckets = age_distribution(&five_passengers());
        assert_eq!(
            buckets,
            vec![
                AgeBucket {
                    age_group: "0-10",
                    count: 2,
                },
                AgeBucket {
                    age_group: "21-30",
                    count: 1,
                },
                AgeBucket {
                    age_group: "41-50",
                    count: 1,
                },
                AgeBucket {
                    age_group: "71-80",
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_group_totals_cover_generated_dataset() {
        let dataset = generate(&DatasetConfig::default().with_seed(11)).unwrap();
        let total = dataset.len();

        let summary = summary_statistics(&dataset);
        assert_eq!(summary.survived + summary.perished, total);

        let by_class: usize = survival_by_class(&dataset).iter().map(|r| r.total).sum();
        assert_eq!(by_class, total);

        let by_gender: usize = survival_by_gender(&dataset).iter().map(|r| r.total).sum();
        assert_eq!(by_gender, total);

        let buckets = age_distribution(&dataset);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), total);
        let labels: Vec<_> = buckets.iter().map(|b| b.age_group).collect();
        let mut sorted = labels.clone();
        sorted.sort_by_key(|label| AGE_LABELS.iter().position(|l| l == label));
        assert_eq!(labels, sorted);
    }
}
